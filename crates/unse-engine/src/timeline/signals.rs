//! Calendar signal derivation: threshold-crossing points → named events.

use std::collections::BTreeMap;

use unse_core::types::{CalendarSignal, LifeDomain, MonthlyOverlapPoint, PeakLevel};

/// Scan the global and per-domain timelines for points classified `Peak`
/// and emit one signal per peak: global peaks as convergence windows,
/// domain peaks as domain windows. Pure function; global signals come
/// first, then domains in their map order, each month-ordered.
pub fn derive_calendar_signals(
    global: &[MonthlyOverlapPoint],
    per_domain: &BTreeMap<LifeDomain, Vec<MonthlyOverlapPoint>>,
) -> Vec<CalendarSignal> {
    let mut signals = Vec::new();

    for point in global {
        if point.peak_level == PeakLevel::Peak {
            signals.push(CalendarSignal {
                trigger: format!("Peak Convergence Window ({})", point.month),
                month: point.month.clone(),
                domain: None,
            });
        }
    }

    for (&domain, series) in per_domain {
        for point in series {
            if point.peak_level == PeakLevel::Peak {
                signals.push(CalendarSignal {
                    trigger: format!("Peak {domain} window ({})", point.month),
                    month: point.month.clone(),
                    domain: Some(domain),
                });
            }
        }
    }

    signals
}
