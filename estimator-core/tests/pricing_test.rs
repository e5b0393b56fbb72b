//! Category pricing rule tests for estimator-core.

use estimator_core::{
    catalog::{gst_rate, LabourRates, PricingCatalog},
    pricing::{
        price_handrail, price_maintenance, price_major_bath, price_minor_bath, price_ramp,
        price_ramp_rails,
    },
    AttachmentRef, CategoryId, GroundType, HandrailForm, HandrailLocation, HandrailMount,
    MaintenanceForm, MajorBathForm, MinorBathForm, QuoteError, RailSides, RampDecking, RampForm,
    RampRailsForm, WALL_SCANNING_FEE_ID,
};
use rust_decimal::Decimal;

fn catalog() -> PricingCatalog {
    PricingCatalog::standard()
}

fn rates() -> LabourRates {
    LabourRates::standard()
}

fn dec(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

// --- Minor bath ---

#[test]
fn minor_bath_prices_option_at_quantity() {
    let form = MinorBathForm {
        option_id: "grab-300".to_string(),
        quantity: 2,
        wall_scanning: false,
    };
    let items = price_minor_bath(&form, &catalog(), &rates(), gst_rate(), &[])
        .expect("pricing should succeed");

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.category, CategoryId::MinorBath);
    assert_eq!(item.description, "Grab Rail (300-450mm)");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.unit_price_ex, Decimal::from(350));
    assert_eq!(item.total_price_inc, Decimal::from(770));
}

#[test]
fn minor_bath_emits_scanning_fee_once() {
    let form = MinorBathForm {
        option_id: "grab-600".to_string(),
        quantity: 1,
        wall_scanning: true,
    };
    let items = price_minor_bath(&form, &catalog(), &rates(), gst_rate(), &[])
        .expect("pricing should succeed");

    assert_eq!(items.len(), 2);
    let fee = &items[1];
    assert_eq!(fee.id, WALL_SCANNING_FEE_ID);
    assert_eq!(fee.quantity, 1);
    assert_eq!(fee.unit_price_ex, Decimal::from(150));
    assert_eq!(fee.total_price_inc, Decimal::from(165));

    // A second add against a ledger that already carries the fee yields
    // only the base item.
    let again = price_minor_bath(&form, &catalog(), &rates(), gst_rate(), &items)
        .expect("pricing should succeed");
    assert_eq!(again.len(), 1);
    assert_ne!(again[0].id, WALL_SCANNING_FEE_ID);
}

#[test]
fn minor_bath_rejects_unknown_option() {
    let form = MinorBathForm {
        option_id: "stair-lift".to_string(),
        quantity: 1,
        wall_scanning: false,
    };
    let err = price_minor_bath(&form, &catalog(), &rates(), gst_rate(), &[]).unwrap_err();
    assert_eq!(err, QuoteError::OptionNotFound("stair-lift".to_string()));
}

#[test]
fn minor_bath_rejects_zero_quantity() {
    let form = MinorBathForm {
        option_id: "grab-300".to_string(),
        quantity: 0,
        wall_scanning: false,
    };
    let err = price_minor_bath(&form, &catalog(), &rates(), gst_rate(), &[]).unwrap_err();
    assert!(matches!(err, QuoteError::Validation(_)));
}

// --- Handrail ---

#[test]
fn handrail_clamps_short_runs_to_minimum_length() {
    let form = HandrailForm {
        mount: HandrailMount::Wall,
        location: HandrailLocation::Indoor,
        length_m: dec(2, 1), // 0.2m, below the 0.5m wall minimum
        quantity: 1,
    };
    let item = price_handrail(&form, gst_rate()).expect("pricing should succeed");

    assert_eq!(item.unit_price_ex, Decimal::from(185)); // 0.5 * 370
    assert_eq!(item.total_price_inc, dec(20_350, 2)); // 203.50
    // The details keep the entered length, not the clamped one.
    assert_eq!(item.details.as_deref(), Some("Length: 0.2m"));
}

#[test]
fn handrail_stair_rate_and_minimum() {
    let form = HandrailForm {
        mount: HandrailMount::Stair,
        location: HandrailLocation::Outdoor,
        length_m: dec(5, 1), // 0.5m, below the 0.8m stair minimum
        quantity: 2,
    };
    let item = price_handrail(&form, gst_rate()).expect("pricing should succeed");

    assert_eq!(item.unit_price_ex, Decimal::from(400)); // 0.8 * 500
    assert_eq!(item.quantity, 2);
    assert_eq!(item.total_price_inc, Decimal::from(880)); // 800 * 1.10
    assert_eq!(
        item.description,
        "SS Handrail (Stair, Outdoor)".to_string()
    );
}

#[test]
fn handrail_location_never_changes_price() {
    let base = HandrailForm {
        mount: HandrailMount::Wall,
        location: HandrailLocation::Indoor,
        length_m: Decimal::from(3),
        quantity: 1,
    };
    let outdoor = HandrailForm {
        location: HandrailLocation::Outdoor,
        ..base.clone()
    };
    let a = price_handrail(&base, gst_rate()).expect("pricing should succeed");
    let b = price_handrail(&outdoor, gst_rate()).expect("pricing should succeed");
    assert_eq!(a.unit_price_ex, b.unit_price_ex);
    assert_ne!(a.description, b.description);
}

#[test]
fn handrail_requires_positive_length() {
    let form = HandrailForm {
        mount: HandrailMount::Wall,
        location: HandrailLocation::Indoor,
        length_m: Decimal::ZERO,
        quantity: 1,
    };
    let err = price_handrail(&form, gst_rate()).unwrap_err();
    match err {
        QuoteError::Validation(fields) => assert_eq!(fields[0].field, "length"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// --- Ramp ---

#[test]
fn ramp_below_minimum_is_floored_to_1400() {
    let form = RampForm {
        decking: RampDecking::Merbau,
        length_m: Decimal::from(1), // area 1.3m², raw 1029.60
        ground: GroundType::Concrete,
        attachments: Vec::new(),
    };
    let item = price_ramp(&form, gst_rate()).expect("pricing should succeed");

    assert_eq!(item.unit_price_ex, Decimal::from(1400));
    assert_eq!(item.total_price_inc, Decimal::from(1540));
    assert_eq!(item.quantity, 1);
    assert_eq!(
        item.details.as_deref(),
        Some("Length: 1m (1.30m²), Ground: Concrete")
    );
}

#[test]
fn ramp_above_minimum_prices_by_area() {
    let form = RampForm {
        decking: RampDecking::Composite,
        length_m: Decimal::from(4), // area 5.2m² * 921 = 4789.20
        ground: GroundType::Soil,
        attachments: Vec::new(),
    };
    let item = price_ramp(&form, gst_rate()).expect("pricing should succeed");

    assert_eq!(item.unit_price_ex, dec(478_920, 2));
    assert_eq!(item.total_price_inc, dec(526_812, 2)); // 5268.12
}

#[test]
fn ramp_carries_attachments_through() {
    let form = RampForm {
        decking: RampDecking::Merbau,
        length_m: Decimal::from(2),
        ground: GroundType::Concrete,
        attachments: vec![AttachmentRef::new("photo-1"), AttachmentRef::new("photo-2")],
    };
    let item = price_ramp(&form, gst_rate()).expect("pricing should succeed");
    assert_eq!(item.attachments.len(), 2);
    assert_eq!(item.attachments[0].as_str(), "photo-1");
}

// --- Ramp rails ---

#[test]
fn ramp_rails_reject_spans_up_to_five_metres() {
    let form = RampRailsForm {
        length_m: Decimal::from(5),
        sides: RailSides::Both,
    };
    let err = price_ramp_rails(&form, gst_rate()).unwrap_err();
    assert!(matches!(err, QuoteError::DomainConstraint(_)));
}

#[test]
fn ramp_rails_price_both_sides_above_minimum() {
    let form = RampRailsForm {
        length_m: dec(501, 2), // 5.01m
        sides: RailSides::Both,
    };
    let item = price_ramp_rails(&form, gst_rate()).expect("pricing should succeed");

    assert_eq!(item.unit_price_ex, Decimal::from(3507)); // 5.01 * 350 * 2
    assert_eq!(item.total_price_inc, dec(385_770, 2)); // 3857.70
}

#[test]
fn ramp_rails_single_side_has_no_multiplier() {
    let form = RampRailsForm {
        length_m: Decimal::from(6),
        sides: RailSides::One,
    };
    let item = price_ramp_rails(&form, gst_rate()).expect("pricing should succeed");
    assert_eq!(item.unit_price_ex, Decimal::from(2100));
}

#[test]
fn ramp_rails_missing_length_is_plain_validation() {
    let form = RampRailsForm {
        length_m: Decimal::ZERO,
        sides: RailSides::One,
    };
    // Not the domain-rule rejection: a missing field is the generic kind.
    let err = price_ramp_rails(&form, gst_rate()).unwrap_err();
    assert!(matches!(err, QuoteError::Validation(_)));
}

// --- Major bath ---

#[test]
fn major_bath_emits_package_plus_inclusions() {
    let form = MajorBathForm {
        length_mm: Decimal::from(1800),
        width_mm: Decimal::from(2000),
        height_mm: Decimal::from(2400),
        inclusions: vec!["vanity".to_string(), "wall-mixer".to_string()],
    };
    let items =
        price_major_bath(&form, &catalog(), gst_rate()).expect("pricing should succeed");

    assert_eq!(items.len(), 3);
    let package = &items[0];
    assert_eq!(package.description, "Standard Package");
    assert_eq!(package.unit_price_ex, Decimal::from(25_000));
    assert_eq!(package.total_price_inc, Decimal::from(27_500));
    assert!(package
        .details
        .as_deref()
        .expect("package details")
        .ends_with("[1800x2000x2400mm]"));

    let vanity = &items[1];
    assert_eq!(vanity.description, "Major Bath - Vanity");
    assert_eq!(vanity.unit_price_ex, Decimal::from(420));
    assert_eq!(vanity.total_price_inc, Decimal::from(462));
    assert_eq!(vanity.quantity, 1);
}

#[test]
fn major_bath_collects_all_dimension_errors() {
    let form = MajorBathForm {
        length_mm: Decimal::ZERO,
        width_mm: Decimal::from(-1),
        height_mm: Decimal::ZERO,
        inclusions: Vec::new(),
    };
    let err = price_major_bath(&form, &catalog(), gst_rate()).unwrap_err();
    match err {
        QuoteError::Validation(fields) => {
            let names: Vec<_> = fields.iter().map(|f| f.field).collect();
            assert_eq!(names, vec!["length", "width", "height"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn major_bath_unknown_inclusion_aborts_whole_operation() {
    let form = MajorBathForm {
        length_mm: Decimal::from(1800),
        width_mm: Decimal::from(2000),
        height_mm: Decimal::from(2400),
        inclusions: vec!["vanity".to_string(), "sauna".to_string()],
    };
    let err = price_major_bath(&form, &catalog(), gst_rate()).unwrap_err();
    assert_eq!(err, QuoteError::OptionNotFound("sauna".to_string()));
}

// --- Maintenance ---

#[test]
fn maintenance_short_jobs_hit_the_minimum_charge() {
    let form = MaintenanceForm {
        description: "Adjust door closer".to_string(),
        duration_hours: dec(5, 1), // 0.5h: 87.50 raw labour
        site_inspection: false,
    };
    let item =
        price_maintenance(&form, &rates(), gst_rate()).expect("pricing should succeed");

    // Labour floored to 350, plus the 90 admin fee.
    assert_eq!(item.unit_price_ex, Decimal::from(440));
    assert_eq!(item.total_price_inc, Decimal::from(484));
    assert_eq!(
        item.details.as_deref(),
        Some("Adjust door closer (0.5 hrs est.)")
    );
}

#[test]
fn maintenance_over_two_hours_bills_flat_day_rate() {
    let three_hours = MaintenanceForm {
        description: "Replace tap washers".to_string(),
        duration_hours: Decimal::from(3),
        site_inspection: false,
    };
    let sixteen_hours = MaintenanceForm {
        duration_hours: Decimal::from(16),
        ..three_hours.clone()
    };
    let a = price_maintenance(&three_hours, &rates(), gst_rate()).expect("pricing");
    let b = price_maintenance(&sixteen_hours, &rates(), gst_rate()).expect("pricing");

    // 1400 day rate + 90 admin fee, identical for both durations.
    assert_eq!(a.unit_price_ex, Decimal::from(1490));
    assert_eq!(a.unit_price_ex, b.unit_price_ex);
}

#[test]
fn maintenance_inspection_fee_is_opt_in() {
    let form = MaintenanceForm {
        description: "Re-seal shower base".to_string(),
        duration_hours: Decimal::from(2),
        site_inspection: true,
    };
    let item =
        price_maintenance(&form, &rates(), gst_rate()).expect("pricing should succeed");
    // 2h * 175 = 350 labour (at the floor), + 90 admin + 150 inspection.
    assert_eq!(item.unit_price_ex, Decimal::from(590));
}

#[test]
fn maintenance_requires_description() {
    let form = MaintenanceForm {
        description: "   ".to_string(),
        duration_hours: Decimal::from(1),
        site_inspection: false,
    };
    let err = price_maintenance(&form, &rates(), gst_rate()).unwrap_err();
    match err {
        QuoteError::Validation(fields) => assert_eq!(fields[0].field, "description"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// --- Cross-rule invariant ---

#[test]
fn every_priced_item_satisfies_the_tax_invariant() {
    let catalog = catalog();
    let rates = rates();
    let mut items = Vec::new();

    items.extend(
        price_minor_bath(
            &MinorBathForm {
                option_id: "bidet-short".to_string(),
                quantity: 3,
                wall_scanning: true,
            },
            &catalog,
            &rates,
            gst_rate(),
            &[],
        )
        .expect("minor bath"),
    );
    items.push(
        price_handrail(
            &HandrailForm {
                mount: HandrailMount::Stair,
                location: HandrailLocation::Indoor,
                length_m: dec(27, 1),
                quantity: 2,
            },
            gst_rate(),
        )
        .expect("handrail"),
    );
    items.extend(
        price_major_bath(
            &MajorBathForm {
                length_mm: Decimal::from(1500),
                width_mm: Decimal::from(1500),
                height_mm: Decimal::from(2400),
                inclusions: vec!["toilet-std".to_string(), "floor-prot".to_string()],
            },
            &catalog,
            gst_rate(),
        )
        .expect("major bath"),
    );

    for item in &items {
        let expected = item.unit_price_ex * Decimal::from(item.quantity) * dec(110, 2);
        assert_eq!(item.total_price_inc, expected, "item {}", item.description);
    }
}
