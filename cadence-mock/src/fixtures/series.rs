use cadence_core::{Observation, PeriodKey};

/// Observations for a fixture identifier, newest first like most agency APIs.
pub fn by_id(id: &str) -> Option<Vec<Observation>> {
    let obs = match id {
        // CPI-U, all items, U.S. city average, not seasonally adjusted.
        "CUUR0000SA0" => monthly(&[
            (
                2022,
                &[
                    281.148, 283.716, 287.504, 289.109, 292.296, 296.311, 296.276, 296.171,
                    296.808, 298.012, 297.711, 296.797,
                ],
            ),
            (
                2023,
                &[
                    299.170, 300.840, 301.836, 303.363, 304.127, 305.109, 305.691, 307.026,
                    307.789, 307.671, 307.051, 306.746,
                ],
            ),
        ]),
        // Same index, seasonally adjusted; only 2023 is published here.
        "CUSR0000SA0" => monthly(&[(
            2023,
            &[
                300.536, 301.648, 301.808, 302.918, 303.294, 303.841, 304.348, 306.269, 307.481,
                307.619, 307.917, 308.850,
            ],
        )]),
        // Unemployment rate, 16 years and over, seasonally adjusted.
        "LNS14000000" => monthly(&[
            (
                2022,
                &[3.9, 3.8, 3.6, 3.7, 3.6, 3.6, 3.5, 3.6, 3.5, 3.6, 3.6, 3.5],
            ),
            (
                2023,
                &[3.4, 3.6, 3.5, 3.4, 3.7, 3.6, 3.5, 3.8, 3.8, 3.8, 3.7, 3.7],
            ),
        ]),
        // Labor force participation rate, seasonally adjusted. October is a
        // published placeholder with no value.
        "LNS11300000" => {
            let mut obs = monthly(&[(
                2023,
                &[
                    62.4, 62.5, 62.6, 62.6, 62.6, 62.6, 62.6, 62.8, 62.8, 62.7, 62.8, 62.5,
                ],
            )]);
            for o in &mut obs {
                if o.period == month(2023, 10) {
                    o.value = None;
                }
            }
            obs
        }
        // Employment cost index, wages and salaries, civilian workers.
        "CIU1020000000000I" => quarterly(&[
            (2022, &[152.9, 154.9, 156.8, 158.2]),
            (2023, &[160.1, 161.8, 163.6, 164.9]),
        ]),
        _ => return None,
    };
    Some(obs)
}

fn month(year: i32, m: u8) -> PeriodKey {
    // Fixture months are always within 1..=12.
    PeriodKey::monthly(year, m).unwrap_or_else(|_| PeriodKey::annual(year))
}

fn monthly(years: &[(i32, &[f64])]) -> Vec<Observation> {
    let mut out = Vec::new();
    for &(year, values) in years {
        for (m, v) in (1u8..).zip(values.iter()) {
            out.push(Observation::new(month(year, m), Some(*v)));
        }
    }
    out.reverse();
    out
}

fn quarterly(years: &[(i32, &[f64])]) -> Vec<Observation> {
    let mut out = Vec::new();
    for &(year, values) in years {
        for (q, v) in (1u8..).zip(values.iter()) {
            let period = PeriodKey::quarterly(year, q).unwrap_or_else(|_| PeriodKey::annual(year));
            out.push(Observation::new(period, Some(*v)));
        }
    }
    out.reverse();
    out
}
