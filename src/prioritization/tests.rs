use super::*;
use chrono::{Duration, TimeZone};

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn make_shipment(
    id: &str,
    orders: u32,
    lpns: u32,
    weight: f64,
    delay_minutes: i64,
    carrier_score: f64,
) -> RawShipment {
    let first_load = reference_time() - Duration::minutes(delay_minutes);
    RawShipment {
        id: id.to_string(),
        shipment_id: format!("SHP-{}", id),
        num_orders: orders,
        num_outbound_lpns: lpns,
        total_weight: weight,
        create_timestamp: first_load - Duration::minutes(30),
        first_load_assignment_timestamp: first_load,
        time_spent_vehicle_assignment: 10.0,
        time_spent_loading_process: 20.0,
        carrier_name: "FastTrack Logistics".to_string(),
        carrier_performance_score: carrier_score,
    }
}

fn only_weight(order_load_weight: f64) -> PrioritizationWeights {
    PrioritizationWeights {
        delay_factor_weight: 0.0,
        order_load_weight,
        lpn_load_weight: 0.0,
        weight_load_weight: 0.0,
        carrier_risk_weight: 0.0,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_basic_ranking_scenario() {
    let a = make_shipment("A", 10, 10, 100.0, 600, 100.0);
    let b = make_shipment("B", 100, 100, 1000.0, 60, 50.0);

    let view = build_prioritization_view(
        &[a, b],
        &PrioritizationWeights::default(),
        reference_time(),
    );

    assert_eq!(view.len(), 2);
    assert_eq!(view[0].id(), "B");
    assert_eq!(view[1].id(), "A");

    let b = &view[0];
    assert!(approx(b.delay_factor, 0.1));
    assert!(approx(b.order_load, 1.0));
    assert!(approx(b.lpn_load, 1.0));
    assert!(approx(b.weight_load, 1.0));
    assert!(approx(b.carrier_risk, 0.5));
    assert!(approx(b.priority_score, 0.68));
    assert_eq!(b.decision, ShipmentDecision::LoadNext);

    let a = &view[1];
    assert!(approx(a.shipment_delay_minutes, 600.0));
    assert!(approx(a.delay_factor, 1.0));
    assert!(approx(a.order_load, 0.1));
    assert!(approx(a.carrier_risk, 0.0));
    assert!(approx(a.priority_score, 0.36));
    assert_eq!(a.decision, ShipmentDecision::KeepWaiting);
}

#[test]
fn test_score_exactly_075_loads_immediately() {
    let row = make_shipment("1", 10, 0, 0.0, 0, 100.0);
    let view = build_prioritization_view(&[row], &only_weight(0.75), reference_time());

    assert_eq!(view[0].priority_score, 0.75);
    assert_eq!(view[0].decision, ShipmentDecision::LoadImmediately);
}

#[test]
fn test_score_exactly_050_loads_next() {
    let row = make_shipment("1", 10, 0, 0.0, 0, 100.0);
    let view = build_prioritization_view(&[row], &only_weight(0.5), reference_time());

    assert_eq!(view[0].priority_score, 0.5);
    assert_eq!(view[0].decision, ShipmentDecision::LoadNext);
}

#[test]
fn test_over_risk_carrier_clamps_to_one() {
    let row = make_shipment("1", 5, 5, 50.0, 10, -20.0);
    let weights = PrioritizationWeights {
        delay_factor_weight: 0.0,
        order_load_weight: 0.0,
        lpn_load_weight: 0.0,
        weight_load_weight: 0.0,
        carrier_risk_weight: 1.0,
    };

    let view = build_prioritization_view(&[row], &weights, reference_time());

    assert!(approx(view[0].carrier_risk, 1.2));
    assert_eq!(view[0].priority_score, 1.0);
    assert_eq!(view[0].decision, ShipmentDecision::LoadImmediately);
}

#[test]
fn test_empty_batch_yields_empty_view() {
    let view = build_prioritization_view(&[], &PrioritizationWeights::default(), reference_time());
    assert!(view.is_empty());
}

#[test]
fn test_all_zero_orders_normalize_to_zero() {
    let rows = vec![
        make_shipment("1", 0, 10, 100.0, 30, 80.0),
        make_shipment("2", 0, 20, 200.0, 60, 80.0),
        make_shipment("3", 0, 30, 300.0, 90, 80.0),
    ];

    let view = build_prioritization_view(&rows, &PrioritizationWeights::default(), reference_time());

    for row in &view {
        assert_eq!(row.order_load, 0.0);
        assert!(row.priority_score.is_finite());
    }
}

#[test]
fn test_all_zero_batch_scores_only_carrier_risk() {
    let rows = vec![
        make_shipment("1", 0, 0, 0.0, 0, 60.0),
        make_shipment("2", 0, 0, 0.0, 0, 90.0),
    ];

    let view = build_prioritization_view(&rows, &PrioritizationWeights::default(), reference_time());

    assert_eq!(view[0].id(), "1");
    assert!(approx(view[0].priority_score, 0.04));
    assert!(approx(view[1].priority_score, 0.01));
}

#[test]
fn test_small_values_normalize_against_floor_of_one() {
    // Maxima are floored at 1, so a half-minute delay is not a full factor.
    let mut row = make_shipment("1", 1, 1, 0.5, 0, 100.0);
    row.first_load_assignment_timestamp = reference_time() - Duration::seconds(30);

    let view = build_prioritization_view(&[row], &PrioritizationWeights::default(), reference_time());

    assert!(approx(view[0].shipment_delay_minutes, 0.5));
    assert!(approx(view[0].delay_factor, 0.5));
    assert!(approx(view[0].weight_load, 0.5));
}

#[test]
fn test_future_assignment_has_zero_delay() {
    let rows = vec![
        make_shipment("past", 10, 10, 10.0, 120, 80.0),
        make_shipment("future", 10, 10, 10.0, -45, 80.0),
    ];

    let view = build_prioritization_view(&rows, &PrioritizationWeights::default(), reference_time());
    let future = view.iter().find(|r| r.id() == "future").unwrap();

    assert_eq!(future.shipment_delay_minutes, 0.0);
    assert_eq!(future.delay_factor, 0.0);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let rows = vec![
        make_shipment("first", 10, 10, 10.0, 60, 80.0),
        make_shipment("second", 10, 10, 10.0, 60, 80.0),
        make_shipment("third", 10, 10, 10.0, 60, 80.0),
    ];

    let view = build_prioritization_view(&rows, &PrioritizationWeights::default(), reference_time());
    let ids: Vec<&str> = view.iter().map(|r| r.id()).collect();

    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn test_normalization_is_batch_relative() {
    let small = make_shipment("small", 10, 10, 100.0, 60, 80.0);
    let large = make_shipment("large", 100, 100, 1000.0, 60, 80.0);
    let weights = PrioritizationWeights::default();

    let alone = build_prioritization_view(&[small.clone()], &weights, reference_time());
    let together = build_prioritization_view(&[small, large], &weights, reference_time());
    let small_together = together.iter().find(|r| r.id() == "small").unwrap();

    assert_eq!(alone[0].order_load, 1.0);
    assert!(approx(small_together.order_load, 0.1));
    assert!(small_together.priority_score < alone[0].priority_score);
}

#[test]
fn test_reference_time_changes_delay() {
    let row = make_shipment("1", 10, 10, 10.0, 60, 80.0);
    let weights = PrioritizationWeights::default();

    let now = build_prioritization_view(&[row.clone()], &weights, reference_time());
    let later = build_prioritization_view(
        &[row],
        &weights,
        reference_time() + Duration::minutes(30),
    );

    assert!(approx(now[0].shipment_delay_minutes, 60.0));
    assert!(approx(later[0].shipment_delay_minutes, 90.0));
}

#[test]
fn test_scored_rows_carry_raw_fields() {
    let row = make_shipment("1", 10, 10, 10.0, 60, 80.0);
    let view = build_prioritization_view(&[row.clone()], &PrioritizationWeights::default(), reference_time());

    assert_eq!(view[0].shipment, row);
}

#[test]
fn test_view_now_scores_past_assignment() {
    let mut row = make_shipment("1", 10, 10, 10.0, 0, 80.0);
    row.first_load_assignment_timestamp = Utc::now() - Duration::hours(1);

    let view = build_prioritization_view_now(&[row], &PrioritizationWeights::default());

    assert!(view[0].shipment_delay_minutes >= 60.0);
    assert_eq!(view[0].delay_factor, 1.0);
}

#[test]
fn test_batch_maxima_floor_at_one() {
    let maxima = BatchMaxima::compute(&[], &[]);
    assert_eq!(maxima.delay_minutes, 1.0);
    assert_eq!(maxima.orders, 1.0);
    assert_eq!(maxima.lpns, 1.0);
    assert_eq!(maxima.weight, 1.0);
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn test_summarize_empty() {
    let summary = summarize(&[]);
    assert_eq!(
        summary,
        PrioritizationSummary {
            total_shipments: 0,
            avg_priority_score: 0.0,
            load_immediately: 0,
            load_next: 0,
            keep_waiting: 0,
        }
    );
    assert_eq!(summary.share(ShipmentDecision::LoadNext), 0.0);
}

#[test]
fn test_summarize_counts_and_average() {
    let a = make_shipment("A", 10, 10, 100.0, 600, 100.0);
    let b = make_shipment("B", 100, 100, 1000.0, 60, 50.0);
    let view = build_prioritization_view(&[a, b], &PrioritizationWeights::default(), reference_time());

    let summary = summarize(&view);

    assert_eq!(summary.total_shipments, 2);
    assert_eq!(summary.load_immediately, 0);
    assert_eq!(summary.load_next, 1);
    assert_eq!(summary.keep_waiting, 1);
    assert!(approx(summary.avg_priority_score, (0.68 + 0.36) / 2.0));
    assert!(approx(summary.share(ShipmentDecision::KeepWaiting), 0.5));
}

#[test]
fn test_summary_serializes_camel_case() {
    let json = serde_json::to_value(summarize(&[])).unwrap();
    assert_eq!(json["totalShipments"], 0);
    assert_eq!(json["avgPriorityScore"], 0.0);
    assert_eq!(json["keepWaiting"], 0);
}

// ============================================================================
// Breakdown
// ============================================================================

#[test]
fn test_breakdown_matches_score_with_same_weights() {
    let a = make_shipment("A", 10, 10, 100.0, 600, 100.0);
    let b = make_shipment("B", 100, 100, 1000.0, 60, 50.0);
    let weights = PrioritizationWeights::default();
    let view = build_prioritization_view(&[a, b], &weights, reference_time());

    let parts = breakdown(&view[0], &weights);

    assert!(approx(parts.delay_contribution, 0.03));
    assert!(approx(parts.order_contribution, 0.25));
    assert!(approx(parts.lpn_contribution, 0.20));
    assert!(approx(parts.weight_contribution, 0.15));
    assert!(approx(parts.carrier_contribution, 0.05));
    assert!(approx(parts.total(), view[0].priority_score));
}

#[test]
fn test_breakdown_with_other_weights_disagrees_with_score() {
    let row = make_shipment("1", 10, 10, 10.0, 60, 50.0);
    let view = build_prioritization_view(&[row], &PrioritizationWeights::default(), reference_time());

    let parts = breakdown(&view[0], &only_weight(0.5));

    assert!(approx(parts.total(), 0.5));
    assert!(!approx(parts.total(), view[0].priority_score));
}

#[test]
fn test_breakdown_is_not_clamped() {
    let row = make_shipment("1", 5, 5, 50.0, 10, -20.0);
    let weights = PrioritizationWeights {
        carrier_risk_weight: 1.0,
        ..only_weight(0.0)
    };
    let view = build_prioritization_view(&[row], &weights, reference_time());

    let parts = breakdown(&view[0], &weights);

    assert!(approx(parts.carrier_contribution, 1.2));
    assert_eq!(view[0].priority_score, 1.0);
}

#[test]
fn test_breakdown_lines_cover_all_factors() {
    let row = make_shipment("1", 10, 10, 10.0, 60, 50.0);
    let weights = PrioritizationWeights::default();
    let view = build_prioritization_view(&[row], &weights, reference_time());

    let lines = breakdown(&view[0], &weights).lines(&view[0], &weights);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].factor, "Delay");
    assert_eq!(lines[4].factor, "Carrier Risk");
    assert!(approx(lines[4].value, 0.5));
    assert!(approx(lines[4].contribution, 0.05));
}

// ============================================================================
// Filters
// ============================================================================

fn filter_fixture() -> Vec<ScoredShipment> {
    let mut rows = vec![
        make_shipment("1", 100, 100, 1000.0, 600, 20.0),
        make_shipment("2", 50, 50, 500.0, 300, 80.0),
        make_shipment("3", 1, 1, 1.0, 1, 100.0),
    ];
    rows[1].carrier_name = "QuickShip Express".to_string();
    rows[2].shipment_id = "ABC-777".to_string();
    build_prioritization_view(&rows, &PrioritizationWeights::default(), reference_time())
}

#[test]
fn test_empty_filter_matches_all() {
    let view = filter_fixture();
    let filter = ShipmentFilter::default();

    assert!(filter.is_empty());
    assert_eq!(filter.apply(&view).len(), 3);
}

#[test]
fn test_filter_by_decision() {
    let view = filter_fixture();
    let filter = ShipmentFilter {
        decision: Some(ShipmentDecision::KeepWaiting),
        ..Default::default()
    };

    let matched = filter.apply(&view);
    assert!(!matched.is_empty());
    assert!(matched
        .iter()
        .all(|r| r.decision == ShipmentDecision::KeepWaiting));
}

#[test]
fn test_filter_by_carrier() {
    let view = filter_fixture();
    let filter = ShipmentFilter {
        carrier: Some("QuickShip Express".to_string()),
        ..Default::default()
    };

    let matched = filter.apply(&view);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id(), "2");
}

#[test]
fn test_filter_search_is_case_insensitive() {
    let view = filter_fixture();
    let filter = ShipmentFilter {
        search: Some("abc".to_string()),
        ..Default::default()
    };

    let matched = filter.apply(&view);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].shipment_id(), "ABC-777");
}

#[test]
fn test_filter_preserves_ranking() {
    let view = filter_fixture();
    let filter = ShipmentFilter {
        search: Some("shp".to_string()),
        ..Default::default()
    };

    let matched = filter.apply(&view);
    assert_eq!(matched.len(), 2);
    assert!(matched[0].priority_score >= matched[1].priority_score);
}

#[test]
fn test_carrier_names_unique_and_sorted() {
    let mut rows = vec![
        make_shipment("1", 1, 1, 1.0, 1, 80.0),
        make_shipment("2", 1, 1, 1.0, 1, 80.0),
        make_shipment("3", 1, 1, 1.0, 1, 80.0),
    ];
    rows[0].carrier_name = "Zeta Freight".to_string();
    rows[2].carrier_name = "Alpha Cargo".to_string();

    assert_eq!(
        carrier_names(&rows),
        vec!["Alpha Cargo", "FastTrack Logistics", "Zeta Freight"]
    );
}

#[test]
fn test_sort_direction_ascending_reverses_ranking() {
    let view = filter_fixture();
    let ascending = SortDirection::Ascending.arrange(view.clone());

    assert_eq!(ascending.first().unwrap().id(), view.last().unwrap().id());
    assert!(ascending
        .windows(2)
        .all(|w| w[0].priority_score <= w[1].priority_score));
    assert_eq!(SortDirection::Descending.arrange(view.clone()), view);
}

#[test]
fn test_sort_direction_from_str() {
    assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
    assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
    assert!("sideways".parse::<SortDirection>().is_err());
}

// ============================================================================
// Property tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn shipment_strategy() -> impl Strategy<Value = RawShipment> {
        (
            0u32..500,
            0u32..1500,
            0.0f64..20_000.0,
            -600i64..6000,
            -50.0f64..150.0,
        )
            .prop_map(|(orders, lpns, weight, delay, carrier)| {
                make_shipment("p", orders, lpns, weight, delay, carrier)
            })
    }

    fn batch_strategy() -> impl Strategy<Value = Vec<RawShipment>> {
        proptest::collection::vec(shipment_strategy(), 0..60).prop_map(|mut rows| {
            for (i, row) in rows.iter_mut().enumerate() {
                row.id = format!("row-{}", i);
            }
            rows
        })
    }

    fn weights_strategy() -> impl Strategy<Value = PrioritizationWeights> {
        (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0).prop_map(
            |(delay, orders, lpns, weight, carrier)| PrioritizationWeights {
                delay_factor_weight: delay,
                order_load_weight: orders,
                lpn_load_weight: lpns,
                weight_load_weight: weight,
                carrier_risk_weight: carrier,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_scores_and_factors_bounded(rows in batch_strategy(), weights in weights_strategy()) {
            let view = build_prioritization_view(&rows, &weights, reference_time());
            prop_assert_eq!(view.len(), rows.len());
            for row in &view {
                prop_assert!((0.0..=1.0).contains(&row.priority_score));
                prop_assert!((0.0..=1.0).contains(&row.delay_factor));
                prop_assert!((0.0..=1.0).contains(&row.order_load));
                prop_assert!((0.0..=1.0).contains(&row.lpn_load));
                prop_assert!((0.0..=1.0).contains(&row.weight_load));
                prop_assert!(row.shipment_delay_minutes >= 0.0);
            }
        }

        #[test]
        fn prop_view_sorted_descending(rows in batch_strategy(), weights in weights_strategy()) {
            let view = build_prioritization_view(&rows, &weights, reference_time());
            for pair in view.windows(2) {
                prop_assert!(pair[0].priority_score >= pair[1].priority_score);
            }
        }

        #[test]
        fn prop_decision_matches_score(rows in batch_strategy(), weights in weights_strategy()) {
            let view = build_prioritization_view(&rows, &weights, reference_time());
            for row in &view {
                let expected = if row.priority_score >= 0.75 {
                    ShipmentDecision::LoadImmediately
                } else if row.priority_score >= 0.5 {
                    ShipmentDecision::LoadNext
                } else {
                    ShipmentDecision::KeepWaiting
                };
                prop_assert_eq!(row.decision, expected);
            }
        }

        #[test]
        fn prop_summary_counts_sum_to_total(rows in batch_strategy(), weights in weights_strategy()) {
            let view = build_prioritization_view(&rows, &weights, reference_time());
            let summary = summarize(&view);
            prop_assert_eq!(
                summary.load_immediately + summary.load_next + summary.keep_waiting,
                summary.total_shipments
            );
            prop_assert!((0.0..=1.0).contains(&summary.avg_priority_score));
        }

        #[test]
        fn prop_pipeline_is_deterministic(rows in batch_strategy(), weights in weights_strategy()) {
            let first = build_prioritization_view(&rows, &weights, reference_time());
            let second = build_prioritization_view(&rows, &weights, reference_time());
            prop_assert_eq!(first, second);
        }
    }
}
