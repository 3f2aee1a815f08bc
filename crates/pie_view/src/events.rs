use pie_progress::ColorPair;

/// Most wedges the viewer lays out. Larger requests are cut down to this.
pub const MAX_TOTAL: i64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SetProgress {
        passed: i64,
        total: i64,
        animated: bool,
    },
    Step(i64),
    SetActiveColors(ColorPair),
    ConfigReload,
    Quit,
}

pub fn cap_total(total: i64) -> i64 {
    if total > MAX_TOTAL {
        log::warn!("Capping {} wedges to {}", total, MAX_TOTAL);
        MAX_TOTAL
    } else {
        total
    }
}
