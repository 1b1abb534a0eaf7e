use std::{fs, path::Path, thread, time::Duration};

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use shared::events::ViewportEvent;

/// One recorded viewport event, delayed relative to the previous step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioStep {
    #[serde(default)]
    pub after_ms: u64,
    pub event: ViewportEvent,
}

pub fn load(path: &Path) -> Result<Vec<ScenarioStep>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing scenario {}", path.display()))
}

/// Replays the recorded steps in recorded time. Stops early if the page's
/// event queue has gone away.
pub fn replay(steps: Vec<ScenarioStep>, events: &Sender<ViewportEvent>) {
    for step in steps {
        if step.after_ms > 0 {
            thread::sleep(Duration::from_millis(step.after_ms));
        }
        if events.send(step.event).is_err() {
            tracing::warn!("event queue closed before the scenario finished");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::FieldId;

    #[test]
    fn scenario_json_parses_into_events() {
        let raw = r#"[
            {"event": {"kind": "page_loaded"}},
            {"after_ms": 50, "event": {"kind": "scroll_changed", "offset_y": 120.0}},
            {"after_ms": 10, "event": {"kind": "indicator_pressed", "index": 2}},
            {"after_ms": 10, "event": {"kind": "field_edited", "field": "email", "value": "a@b.com"}}
        ]"#;
        let steps: Vec<ScenarioStep> = serde_json::from_str(raw).expect("scenario parses");

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].after_ms, 0);
        assert_eq!(steps[0].event, ViewportEvent::PageLoaded);
        assert_eq!(steps[2].event, ViewportEvent::IndicatorPressed { index: 2 });
        assert_eq!(
            steps[3].event,
            ViewportEvent::FieldEdited {
                field: FieldId::Email,
                value: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn replay_pushes_every_event_in_order() {
        let (tx, rx) = crossbeam_channel::bounded(8);
        let steps = vec![
            ScenarioStep {
                after_ms: 0,
                event: ViewportEvent::PageLoaded,
            },
            ScenarioStep {
                after_ms: 0,
                event: ViewportEvent::SlideNextPressed,
            },
        ];

        replay(steps, &tx);
        drop(tx);

        let received: Vec<ViewportEvent> = rx.iter().collect();
        assert_eq!(
            received,
            vec![ViewportEvent::PageLoaded, ViewportEvent::SlideNextPressed]
        );
    }
}
