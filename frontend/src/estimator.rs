//! Host revenue projection for the home page simulator.
//!
//! Pricing is a fixed two-tier model: an hourly energy rate per station type, a flat
//! connection fee and a 30% markup give the customer price of a session. The platform
//! keeps a flat fee plus a share of that final price on every session.

const STANDARD_HOURLY_RATE: f64 = 2.10;
const SUPERCHARGER_HOURLY_RATE: f64 = 6.60;
const CONNECTION_FEE: f64 = 1.0;
const MARKUP: f64 = 1.3;
const SERVICE_FEE_FLAT: f64 = 1.0;
// Applied to the marked-up customer price, not to the energy cost.
const SERVICE_FEE_SHARE: f64 = 0.12;

pub const STATIONS_RANGE: (u32, u32) = (1, 50);
pub const SESSIONS_RANGE: (u32, u32) = (1, 20);
pub const HOURS_RANGE: (f64, f64) = (0.25, 6.0);
pub const HOURS_STEP: f64 = 0.25;
pub const DAYS_RANGE: (u32, u32) = (1, 31);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationType {
    Standard,
    Supercharger,
}

impl StationType {
    pub fn hourly_rate(self) -> f64 {
        match self {
            StationType::Standard => STANDARD_HOURLY_RATE,
            StationType::Supercharger => SUPERCHARGER_HOURLY_RATE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StationType::Standard => "Standard (~2,10€ / h)",
            StationType::Supercharger => "Superchargeur (~6,60€ / h)",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            StationType::Standard => "standard",
            StationType::Supercharger => "supercharger",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(StationType::Standard),
            "supercharger" => Some(StationType::Supercharger),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueEstimatorInput {
    pub station_count: u32,
    pub sessions_per_day_per_station: u32,
    pub hours_per_session: f64,
    pub days_per_month: u32,
    pub station_type: StationType,
}

impl Default for RevenueEstimatorInput {
    fn default() -> Self {
        Self {
            station_count: 1,
            sessions_per_day_per_station: 3,
            hours_per_session: 2.0,
            days_per_month: 30,
            station_type: StationType::Standard,
        }
    }
}

impl RevenueEstimatorInput {
    /// Pulls every field back into the range the simulator form offers.
    /// Hours are snapped to the nearest quarter hour.
    pub fn clamped(self) -> Self {
        let hours = if self.hours_per_session.is_finite() {
            (self.hours_per_session / HOURS_STEP).round() * HOURS_STEP
        } else {
            HOURS_RANGE.0
        };
        Self {
            station_count: self.station_count.clamp(STATIONS_RANGE.0, STATIONS_RANGE.1),
            sessions_per_day_per_station: self
                .sessions_per_day_per_station
                .clamp(SESSIONS_RANGE.0, SESSIONS_RANGE.1),
            hours_per_session: hours.clamp(HOURS_RANGE.0, HOURS_RANGE.1),
            days_per_month: self.days_per_month.clamp(DAYS_RANGE.0, DAYS_RANGE.1),
            station_type: self.station_type,
        }
    }

    pub fn sessions_per_month(&self) -> f64 {
        f64::from(self.station_count)
            * f64::from(self.sessions_per_day_per_station)
            * f64::from(self.days_per_month)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueEstimate {
    pub per_session_final_price: f64,
    pub per_session_service_fee: f64,
    pub gross_monthly_revenue: f64,
    pub net_monthly_revenue: f64,
    pub net_yearly_revenue: f64,
}

/// Projects host revenue from the simulator inputs. Total and side-effect free;
/// callers clamp the input first (see [`RevenueEstimatorInput::clamped`]).
pub fn estimate(input: &RevenueEstimatorInput) -> RevenueEstimate {
    let hourly_rate = input.station_type.hourly_rate();
    let final_price_per_session = (input.hours_per_session * hourly_rate + CONNECTION_FEE) * MARKUP;
    let sessions_per_month = input.sessions_per_month();
    let gross = sessions_per_month * final_price_per_session;

    let service_fee_per_session = SERVICE_FEE_FLAT + SERVICE_FEE_SHARE * final_price_per_session;
    let total_service_fees = sessions_per_month * service_fee_per_session;
    let net = (gross - total_service_fees).max(0.0);

    RevenueEstimate {
        per_session_final_price: final_price_per_session,
        per_session_service_fee: service_fee_per_session,
        gross_monthly_revenue: gross,
        net_monthly_revenue: net,
        net_yearly_revenue: net * 12.0,
    }
}

/// Formats an amount the way fr-FR renders euros: "5 345 €", "6,76 €".
///
/// Rounds half-up on the shortest decimal form of `value`, so 7.734999999999999
/// prints as "7,73 €" the way the browser does.
pub fn format_eur(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{}\u{a0}€", value);
    }

    let (whole, fraction) = round_half_up(&format!("{}", value.abs()), decimals);

    let mut out = String::new();
    if value < 0.0 && (whole.bytes().chain(fraction.bytes())).any(|d| d != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(&whole));
    if decimals > 0 {
        out.push(',');
        out.push_str(&fraction);
    }
    out.push_str("\u{a0}€");
    out
}

/// Rounds a plain decimal string ("7.734999", no sign or exponent) to
/// `decimals` places. Returns the integer and fraction digits.
fn round_half_up(repr: &str, decimals: usize) -> (String, String) {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));
    let frac_part = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend((0..decimals).map(|i| frac_part.get(i).copied().unwrap_or(b'0')));

    if frac_part.get(decimals).map_or(false, |d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let fraction = digits.split_off(digits.len() - decimals);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

/// fr-FR digit grouping with a narrow no-break space.
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn scenario(station_type: StationType) -> RevenueEstimatorInput {
        RevenueEstimatorInput {
            station_count: 1,
            sessions_per_day_per_station: 3,
            hours_per_session: 2.0,
            days_per_month: 30,
            station_type,
        }
    }

    #[test]
    fn standard_scenario_matches_reference_figures() {
        let est = estimate(&scenario(StationType::Standard));
        assert!((est.per_session_final_price - 6.76).abs() < EPS);
        assert!((est.gross_monthly_revenue - 608.4).abs() < EPS);
        assert!((est.per_session_service_fee - 1.8112).abs() < EPS);
        assert!((est.net_monthly_revenue - 445.392).abs() < EPS);
        assert!((est.net_yearly_revenue - 5344.704).abs() < 1e-8);
    }

    #[test]
    fn supercharger_uses_higher_rate() {
        let est = estimate(&scenario(StationType::Supercharger));
        assert!((est.per_session_final_price - 18.46).abs() < EPS);
    }

    #[test]
    fn yearly_is_twelve_months_for_all_inputs() {
        for station_type in [StationType::Standard, StationType::Supercharger] {
            for stations in [1, 7, 50] {
                for sessions in [1, 11, 20] {
                    for quarter in [1, 9, 24] {
                        let input = RevenueEstimatorInput {
                            station_count: stations,
                            sessions_per_day_per_station: sessions,
                            hours_per_session: quarter as f64 * HOURS_STEP,
                            days_per_month: 30,
                            station_type,
                        };
                        let est = estimate(&input);
                        assert_eq!(est.net_yearly_revenue, est.net_monthly_revenue * 12.0);
                        assert!(est.net_monthly_revenue >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn net_is_floored_at_zero() {
        let input = RevenueEstimatorInput {
            hours_per_session: -10.0,
            ..RevenueEstimatorInput::default()
        };
        let est = estimate(&input);
        assert!(est.gross_monthly_revenue < 0.0);
        assert_eq!(est.net_monthly_revenue, 0.0);
        assert_eq!(est.net_yearly_revenue, 0.0);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let input = scenario(StationType::Supercharger);
        assert_eq!(estimate(&input), estimate(&input));
    }

    #[test]
    fn clamped_pulls_fields_into_form_ranges() {
        let input = RevenueEstimatorInput {
            station_count: 0,
            sessions_per_day_per_station: 99,
            hours_per_session: 2.1,
            days_per_month: 40,
            station_type: StationType::Standard,
        }
        .clamped();
        assert_eq!(input.station_count, 1);
        assert_eq!(input.sessions_per_day_per_station, 20);
        assert_eq!(input.hours_per_session, 2.0);
        assert_eq!(input.days_per_month, 31);

        let nan = RevenueEstimatorInput {
            hours_per_session: f64::NAN,
            ..RevenueEstimatorInput::default()
        };
        assert_eq!(nan.clamped().hours_per_session, 0.25);
    }

    #[test]
    fn euro_formatting_follows_fr_locale() {
        assert_eq!(format_eur(608.4, 0), "608\u{a0}€");
        assert_eq!(format_eur(5344.704, 0), "5\u{202f}345\u{a0}€");
        assert_eq!(format_eur(6.76, 2), "6,76\u{a0}€");
        assert_eq!(format_eur(1.8112, 2), "1,81\u{a0}€");
        assert_eq!(format_eur(1_234_567.0, 0), "1\u{202f}234\u{202f}567\u{a0}€");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn euro_rounding_uses_the_shortest_decimal_form() {
        let input = RevenueEstimatorInput {
            hours_per_session: 0.75,
            ..scenario(StationType::Supercharger)
        };
        let price = estimate(&input).per_session_final_price;
        assert_eq!(format_eur(price, 2), "7,73\u{a0}€");
        assert_eq!(format_eur(7.734999999999999, 2), "7,73\u{a0}€");
        assert_eq!(format_eur(0.125, 2), "0,13\u{a0}€");
        assert_eq!(format_eur(999.995, 2), "1\u{202f}000,00\u{a0}€");
        assert_eq!(format_eur(9.5, 0), "10\u{a0}€");
        assert_eq!(format_eur(-0.001, 2), "0,00\u{a0}€");
        assert_eq!(format_eur(-12.5, 1), "-12,5\u{a0}€");
    }

    #[test]
    fn station_type_round_trips_through_form_value() {
        for t in [StationType::Standard, StationType::Supercharger] {
            assert_eq!(StationType::from_value(t.value()), Some(t));
        }
        assert_eq!(StationType::from_value("turbo"), None);
    }
}
