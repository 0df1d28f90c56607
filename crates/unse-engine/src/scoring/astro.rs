//! Astrology-layer scorers: solar return and secondary progression.

use chrono::{Datelike, Duration, NaiveDate};

use unse_core::types::{ScoreResult, ZodiacSign};

/// Solar-return result: the score plus the birthday geometry it was
/// derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarReturnScore {
    pub result: ScoreResult,
    /// True when target month and day match the birth month and day.
    pub is_birthday: bool,
    /// Signed day distance to the nearest solar return, 0 on exact match.
    pub days_from_birthday: i64,
}

/// Nearest anniversary of `birth` to `target`, searching the adjacent
/// years to handle year boundaries. Feb 29 anniversaries fall back to
/// Feb 28 in common years.
fn nearest_anniversary(birth: NaiveDate, target: NaiveDate) -> NaiveDate {
    let mut best: Option<NaiveDate> = None;
    for year in [target.year() - 1, target.year(), target.year() + 1] {
        let candidate = NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28));
        if let Some(c) = candidate {
            let better = match best {
                Some(b) => {
                    (target - c).num_days().abs() < (target - b).num_days().abs()
                }
                None => true,
            };
            if better {
                best = Some(c);
            }
        }
    }
    // The target year candidate always exists, so `best` is never empty.
    best.unwrap_or(target)
}

/// Solar-return score: proximity of the target date to the yearly solar
/// return. Within the 7-day return window the year's themes are
/// activated (+8); a wider 30-day halo still registers (+4).
pub fn solar_return_score(birth_date: NaiveDate, target: NaiveDate) -> SolarReturnScore {
    let anniversary = nearest_anniversary(birth_date, target);
    let days_from_birthday = (target - anniversary).num_days();
    let is_birthday =
        target.month() == birth_date.month() && target.day() == birth_date.day();

    let mut result = ScoreResult::neutral();
    let distance = days_from_birthday.abs();
    if distance <= 7 {
        result.add_positive(
            8.0,
            "solar_return_window",
            "태양회귀 구간이라 한 해의 테마가 새로 깨어납니다",
        );
    } else if distance <= 30 {
        result.add_positive(
            4.0,
            "solar_return_near",
            "태양회귀가 가까워 새 흐름의 예열이 시작됩니다",
        );
    }

    SolarReturnScore {
        result,
        is_birthday,
        days_from_birthday,
    }
}

/// Secondary-progression score: one day after birth stands for one year
/// of life. The progressed sun sign's element is compared with the natal
/// sign's element.
pub fn progression_score(birth_date: NaiveDate, target: NaiveDate) -> ScoreResult {
    if target < birth_date {
        return ScoreResult::neutral();
    }
    let age_years = (target - birth_date).num_days() / 365;
    let progressed_date = birth_date + Duration::days(age_years);

    let natal = ZodiacSign::from_date(birth_date);
    let progressed = ZodiacSign::from_date(progressed_date);

    let mut result = ScoreResult::neutral();
    if progressed.element() == natal.element() {
        result.add_positive(
            5.0,
            "progression_element_match",
            "진행 태양이 본래의 원소 위를 걸어 안정적입니다",
        );
    } else if progressed.element().harmonizes_with(natal.element()) {
        result.add_positive(
            4.0,
            "progression_harmonious",
            "진행 태양이 조화로운 원소를 지나 순풍이 붑니다",
        );
    } else {
        result.add_negative(
            2.0,
            "progression_tension",
            "진행 태양이 긴장 원소를 지나니 속도를 조절하세요",
        );
    }
    result
}
