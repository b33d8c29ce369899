use offplan_core::PropertyId;
use offplan_roi::{project, NavigationParams, RoiError, RoiInputs};
use proptest::prelude::*;

fn inputs_strategy() -> impl Strategy<Value = RoiInputs> {
    (
        1_u32..50_000,
        1_u32..=100,
        0_u32..=30,
        0_u32..=15,
        1_u32..=30,
        0_u32..=200_000,
    )
        .prop_map(|(price, down, appreciation, rental, years, service)| RoiInputs {
            property_price: f64::from(price) * 1_000.0,
            down_payment_percent: f64::from(down),
            annual_appreciation_percent: f64::from(appreciation),
            rental_yield_percent: f64::from(rental),
            holding_period_years: f64::from(years),
            annual_service_charge: f64::from(service),
        })
}

proptest! {
    #[test]
    fn total_return_is_gain_plus_net_rent(inputs in inputs_strategy()) {
        let r = project(&inputs).unwrap();
        let tolerance = 1e-6 * r.future_value.abs().max(1.0);
        prop_assert!((r.total_return - (r.capital_gain + r.net_rental_income)).abs() <= tolerance);
        prop_assert!(r.future_value >= inputs.property_price);
    }

    #[test]
    fn shares_split_the_total_return(inputs in inputs_strategy()) {
        let r = project(&inputs).unwrap();
        if r.total_return == 0.0 {
            prop_assert_eq!(r.capital_gain_share_percent, 0.0);
            prop_assert_eq!(r.rental_share_percent, 0.0);
        } else {
            let sum = r.capital_gain_share_percent + r.rental_share_percent;
            // Near-cancelling parts inflate both shares, so scale the tolerance.
            let scale =
                (r.capital_gain_share_percent.abs() + r.rental_share_percent.abs()).max(100.0);
            prop_assert!((sum - 100.0).abs() <= 1e-9 * scale);
        }
    }

    #[test]
    fn extreme_growth_is_finite_or_an_overflow_error(
        appreciation in 0.0_f64..1_000.0,
        years in 1.0_f64..5_000.0,
    ) {
        let inputs = RoiInputs {
            annual_appreciation_percent: appreciation,
            holding_period_years: years,
            ..RoiInputs::with_defaults(1_000_000.0)
        };
        match project(&inputs) {
            Ok(r) => {
                prop_assert!(r.future_value.is_finite());
                prop_assert!(r.total_return.is_finite());
                prop_assert!(r.capital_gain_share_percent.is_finite());
                prop_assert!(r.annualized_roi_percent.map_or(true, f64::is_finite));
            }
            Err(err) => prop_assert_eq!(err, RoiError::Overflow),
        }
    }

    #[test]
    fn annualized_rate_is_never_nan(inputs in inputs_strategy()) {
        let r = project(&inputs).unwrap();
        match r.annualized_roi_percent {
            Some(rate) => prop_assert!(rate.is_finite()),
            None => prop_assert!(r.total_roi_percent < -100.0),
        }
    }
}

#[test]
fn zero_down_payment_is_reported_not_infinite() {
    let inputs = RoiInputs {
        down_payment_percent: 0.0,
        ..RoiInputs::with_defaults(1_000_000.0)
    };
    assert_eq!(project(&inputs), Err(RoiError::ZeroDownPayment));
}

#[test]
fn navigation_hand_off_drives_a_projection() {
    let query =
        NavigationParams::for_unit(PropertyId::from("7"), None, 1_000_000).to_query_string();
    let inputs = NavigationParams::parse(&query)
        .unwrap()
        .to_draft()
        .resolve()
        .unwrap();
    let result = project(&inputs).unwrap();
    assert!((result.down_payment - 200_000.0).abs() < 1e-6);
    assert!((result.total_roi_percent - 384.66).abs() < 0.01);
}
