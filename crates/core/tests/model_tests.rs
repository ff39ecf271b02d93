use chrono::NaiveDate;
use investor_deck_core::models::cohort::Cohort;
use investor_deck_core::models::highlights::Highlights;
use investor_deck_core::models::lead::{FormStatus, LeadRequest};
use investor_deck_core::models::revenue::{
    parse_month_label, FinancialData, MonthlyRecord, RevenuePoint, RevenueSeries, SeriesSegment,
};
use investor_deck_core::models::settings::{DeckSettings, SliderRange};
use investor_deck_core::models::slider::{Bounds, ListenerKind, WindowEvent};
use investor_deck_core::models::team::TeamMember;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn point(month: &str, revenue: Option<f64>, projected: Option<f64>, segment: SeriesSegment) -> RevenuePoint {
    RevenuePoint {
        month: month.into(),
        revenue,
        projected,
        segment,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MonthlyRecord
// ═══════════════════════════════════════════════════════════════════

mod monthly_record {
    use super::*;

    #[test]
    fn actual_constructor() {
        let r = MonthlyRecord::actual("Nov '25", 540_266.0);
        assert_eq!(r.month, "Nov '25");
        assert_eq!(r.revenue, Some(540_266.0));
        assert_eq!(r.projected, None);
    }

    #[test]
    fn forecast_constructor() {
        let r = MonthlyRecord::forecast("Jan '26", 640_000.0);
        assert_eq!(r.revenue, None);
        assert_eq!(r.projected, Some(640_000.0));
    }

    #[test]
    fn deserializes_missing_fields_as_none() {
        let r: MonthlyRecord = serde_json::from_str(r#"{"month":"Dec '25","projected":580000}"#).unwrap();
        assert_eq!(r.month, "Dec '25");
        assert_eq!(r.revenue, None);
        assert_eq!(r.projected, Some(580_000.0));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_string(&MonthlyRecord::actual("Mar '25", 1.0)).unwrap();
        assert!(json.contains("revenue"));
        assert!(!json.contains("projected"));
    }

    #[test]
    fn period_parses_label() {
        assert_eq!(MonthlyRecord::actual("Dec '25", 0.0).period(), Some(d(2025, 12, 1)));
        assert_eq!(MonthlyRecord::actual("Jan '26", 0.0).period(), Some(d(2026, 1, 1)));
    }

    #[test]
    fn period_of_garbage_label_is_none() {
        assert_eq!(MonthlyRecord::actual("Q4 2025", 0.0).period(), None);
        assert_eq!(parse_month_label(""), None);
    }

    #[test]
    fn month_labels_order_chronologically() {
        let a = parse_month_label("Nov '25").unwrap();
        let b = parse_month_label("Dec '25").unwrap();
        let c = parse_month_label("Jan '26").unwrap();
        assert!(a < b && b < c);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RevenueSeries
// ═══════════════════════════════════════════════════════════════════

mod revenue_series {
    use super::*;

    fn sample() -> RevenueSeries {
        RevenueSeries::new(vec![
            point("Oct '25", Some(520_000.0), None, SeriesSegment::Actual),
            point("Nov '25", Some(540_266.0), Some(540_266.0), SeriesSegment::Actual),
            point("Dec '25", None, Some(580_000.0), SeriesSegment::Projection),
            point("Jan '26", None, Some(640_000.0), SeriesSegment::Projection),
        ])
    }

    #[test]
    fn segments_split() {
        let s = sample();
        assert_eq!(s.actuals().count(), 2);
        assert_eq!(s.projections().count(), 2);
        assert_eq!(s.projection_months(), 2);
    }

    #[test]
    fn months_in_order() {
        assert_eq!(sample().months(), vec!["Oct '25", "Nov '25", "Dec '25", "Jan '26"]);
    }

    #[test]
    fn empty_default() {
        let s = RevenueSeries::default();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.projection_months(), 0);
    }

    #[test]
    fn point_json_omits_absent_values() {
        let json = serde_json::to_value(point("Dec '25", None, Some(1.0), SeriesSegment::Projection)).unwrap();
        assert!(json.get("revenue").is_none());
        assert_eq!(json["projected"], 1.0);
        assert_eq!(json["segment"], "Projection");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FinancialData / Highlights / Cohort / TeamMember
// ═══════════════════════════════════════════════════════════════════

mod static_content {
    use super::*;

    #[test]
    fn financial_data_parses() {
        let json = r##"{
            "monthly_revenue_with_projection": [
                {"month": "Nov '25", "revenue": 540266},
                {"month": "Dec '25", "projected": 580000}
            ],
            "revenue_by_product": [
                {"name": "Wallet", "value": 120000, "color": "#20319D"}
            ]
        }"##;
        let data: FinancialData = serde_json::from_str(json).unwrap();
        assert_eq!(data.monthly_revenue_with_projection.len(), 2);
        assert_eq!(data.revenue_by_product[0].name, "Wallet");
        assert_eq!(data.revenue_by_product[0].color, "#20319D");
    }

    #[test]
    fn financial_data_missing_sections_default_empty() {
        let data: FinancialData = serde_json::from_str("{}").unwrap();
        assert!(data.monthly_revenue_with_projection.is_empty());
        assert!(data.revenue_by_product.is_empty());
    }

    #[test]
    fn highlights_ignore_unknown_keys() {
        let h: Highlights = serde_json::from_str(
            r#"{"six_month_growth": 38.5, "credit_rail_nrr": 112, "total_customers": 27000}"#,
        )
        .unwrap();
        assert_eq!(h.six_month_growth, 38.5);
        assert_eq!(h.credit_rail_nrr, 112.0);
        assert_eq!(h.embedded_nrr, 0.0);
        assert_eq!(h.wallet_nrr, 0.0);
    }

    #[test]
    fn cohort_parses() {
        let c: Cohort =
            serde_json::from_str(r#"{"month": "Jan '24", "size": 412, "retention": [100, 72.5, 64]}"#).unwrap();
        assert_eq!(c.size, 412);
        assert_eq!(c.retention, vec![100.0, 72.5, 64.0]);
    }

    #[test]
    fn avatar_fallback_uses_first_character() {
        let m = TeamMember {
            name: "Ajay Kumar".into(),
            role: "Founder & CEO".into(),
            bio: String::new(),
            image: "/images/team/ajay.jpg".into(),
        };
        assert_eq!(m.avatar_fallback_url(), "https://placehold.co/400x400?text=A");
    }

    #[test]
    fn avatar_fallback_empty_name() {
        let m: TeamMember = serde_json::from_str(r#"{"name": "", "role": "Advisor"}"#).unwrap();
        assert_eq!(m.avatar_fallback_url(), "https://placehold.co/400x400?text=");
        assert!(m.bio.is_empty());
        assert!(m.image.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DeckSettings::default();
        assert_eq!(s.projection.revenue_share, 0.80);
        assert_eq!(s.projection.bull_case_multiplier, 1.15);
        assert_eq!(s.projection.fallback_start_revenue, 540_266.0);
        assert_eq!(s.projection.fallback_end_revenue, 705_048.0);
        assert_eq!(s.projection.projection_year_marker, "'26");
        assert_eq!(s.projection.projection_lead_months, vec!["Dec '25"]);
        assert_eq!(
            s.projection.excluded_display_months,
            vec!["Dec '24", "Jan '25", "Feb '25"]
        );
        assert_eq!(s.deposits.default, 10_000_000.0);
        assert_eq!(s.fed_rate.default, 4.5);
        assert_eq!(s.initial_slider_position, 50.0);
        assert_eq!(s.scheduling_url, "https://calendly.com/zmvc/ir");
        assert_eq!(s.submit_delay().as_millis(), 1000);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: DeckSettings = serde_json::from_str(
            r#"{"submit_delay_ms": 10, "projection": {"bull_case_multiplier": 1.3}}"#,
        )
        .unwrap();
        assert_eq!(s.submit_delay_ms, 10);
        assert_eq!(s.projection.bull_case_multiplier, 1.3);
        assert_eq!(s.projection.revenue_share, 0.80);
        assert_eq!(s.deposits, DeckSettings::default().deposits);
    }

    #[test]
    fn snap_deposits_to_step() {
        let r = DeckSettings::default().deposits;
        assert_eq!(r.snap(12_345_678.0), 12_000_000.0);
        assert_eq!(r.snap(12_600_000.0), 13_000_000.0);
        assert_eq!(r.snap(500.0), 1_000_000.0);
        assert_eq!(r.snap(2_000_000_000.0), 100_000_000.0);
    }

    #[test]
    fn snap_fed_rate_to_quarter_points() {
        let r = DeckSettings::default().fed_rate;
        assert_eq!(r.snap(4.6), 4.5);
        assert_eq!(r.snap(4.4), 4.5);
        assert_eq!(r.snap(5.13), 5.25);
        assert_eq!(r.snap(-1.0), 0.0);
        assert_eq!(r.snap(11.0), 10.0);
    }

    #[test]
    fn snap_non_finite_returns_default() {
        let r = DeckSettings::default().fed_rate;
        assert_eq!(r.snap(f64::NAN), 4.5);
        assert_eq!(r.snap(f64::INFINITY), 4.5);
    }

    #[test]
    fn snap_with_inverted_bounds_swaps_them() {
        let r = SliderRange { min: 100.0, max: 0.0, step: 10.0, default: 50.0 };
        assert_eq!(r.snap(44.0), 40.0);
        assert_eq!(r.snap(-5.0), 0.0);
        assert_eq!(r.snap(500.0), 100.0);
    }

    #[test]
    fn snap_with_nan_bound_leaves_value() {
        let r = SliderRange { min: f64::NAN, max: 10.0, step: 1.0, default: 5.0 };
        assert_eq!(r.snap(7.3), 7.3);
    }

    #[test]
    fn snap_without_step_only_clamps() {
        let r = SliderRange { min: 0.0, max: 1.0, step: 0.0, default: 0.5 };
        assert_eq!(r.snap(0.333), 0.333);
        assert_eq!(r.snap(3.0), 1.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Slider & Lead models
// ═══════════════════════════════════════════════════════════════════

mod slider_models {
    use super::*;

    #[test]
    fn bounds_measured() {
        assert!(Bounds::new(10.0, 200.0).is_measured());
        assert!(!Bounds::new(10.0, 0.0).is_measured());
        assert!(!Bounds::new(10.0, -5.0).is_measured());
        assert!(!Bounds::new(f64::NAN, 100.0).is_measured());
    }

    #[test]
    fn window_event_kinds() {
        assert_eq!(WindowEvent::PointerUp.kind(), ListenerKind::PointerUp);
        assert_eq!(WindowEvent::PointerMove { client_x: 1.0 }.kind(), ListenerKind::PointerMove);
        assert_eq!(WindowEvent::TouchEnd.kind(), ListenerKind::TouchEnd);
        assert_eq!(WindowEvent::TouchMove { touches: vec![] }.kind(), ListenerKind::TouchMove);
    }

    #[test]
    fn listener_kind_display_uses_dom_names() {
        let names: Vec<String> = ListenerKind::SLIDER.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["mouseup", "mousemove", "touchend", "touchmove"]);
    }

    #[test]
    fn lead_request_builder() {
        let r = LeadRequest::new("Jane", "Doe", "jane@fund.com", "Acme Ventures")
            .with_message("Interested in the wallet model");
        assert_eq!(r.message.as_deref(), Some("Interested in the wallet model"));
        let json = serde_json::to_string(&LeadRequest::new("a", "b", "c@d", "e")).unwrap();
        assert!(!json.contains("message"));
    }

    #[test]
    fn form_status_display() {
        assert_eq!(FormStatus::Editing.to_string(), "editing");
        assert_eq!(FormStatus::Submitting.to_string(), "submitting");
        assert_eq!(FormStatus::Submitted.to_string(), "submitted");
    }
}
