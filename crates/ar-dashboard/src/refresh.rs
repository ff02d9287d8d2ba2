//! Widget refresh tracking
//!
//! No background task runs here: the host ticks this schedule, re-executes
//! the reports of whatever widgets are due, and marks them refreshed.

use std::time::{Duration, Instant};

use ahash::AHashMap;

use ar_core::{Widget, WidgetId};

/// Tracks when each widget was last refreshed
#[derive(Debug, Default)]
pub struct RefreshSchedule {
    last: AHashMap<WidgetId, Instant>,
}

impl RefreshSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_refreshed(&mut self, id: WidgetId, now: Instant) {
        self.last.insert(id, now);
    }

    /// Drop tracking for a removed widget
    pub fn forget(&mut self, id: WidgetId) {
        self.last.remove(&id);
    }

    /// Widgets whose `refresh_interval` has elapsed. A widget with an
    /// interval that was never marked is due immediately; widgets without
    /// an interval never are.
    pub fn due(&self, widgets: &[Widget], now: Instant) -> Vec<WidgetId> {
        widgets
            .iter()
            .filter_map(|widget| {
                let interval = widget.refresh_interval?;
                if interval == 0 {
                    return None;
                }
                match self.last.get(&widget.id) {
                    None => Some(widget.id),
                    Some(at) => (now.duration_since(*at)
                        >= Duration::from_secs(u64::from(interval)))
                    .then_some(widget.id),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::{GridRect, WidgetConfig};

    fn widget(interval: Option<u32>) -> Widget {
        let mut widget = Widget::new(
            "w",
            WidgetConfig::Kpi { report_id: None },
            GridRect::new(0, 0, 2, 2),
        );
        widget.refresh_interval = interval;
        widget
    }

    #[test]
    fn test_interval_elapses() {
        let now = Instant::now();
        let widgets = vec![widget(Some(30)), widget(None)];
        let mut schedule = RefreshSchedule::new();

        // Never marked: due immediately; the interval-less widget never is
        assert_eq!(schedule.due(&widgets, now), vec![widgets[0].id]);

        schedule.mark_refreshed(widgets[0].id, now);
        assert!(schedule.due(&widgets, now + Duration::from_secs(29)).is_empty());
        assert_eq!(
            schedule.due(&widgets, now + Duration::from_secs(30)),
            vec![widgets[0].id]
        );
    }

    #[test]
    fn test_zero_interval_is_disabled() {
        let now = Instant::now();
        let widgets = vec![widget(Some(0))];
        let schedule = RefreshSchedule::new();

        assert!(schedule.due(&widgets, now).is_empty());
    }
}
