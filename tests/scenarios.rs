// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end cabinet scenarios

use approx::assert_relative_eq;
use cabinetkit::error::{Axis, Level};
use cabinetkit::spec::{DistributionMode, HingeStyle, RoofStyle};
use cabinetkit::views::cut_list;
use cabinetkit::{
    compute_from_raw, compute_panels, normalize, CabinetError, Material, PanelList, PanelRole,
    RawCabinetSpec,
};

fn compute(raw: RawCabinetSpec) -> PanelList {
    compute_from_raw(&raw).expect("cabinet should decompose")
}

#[test]
fn test_reference_cut_list() {
    let list = compute(RawCabinetSpec {
        width: 900.0,
        height: 1800.0,
        depth: 500.0,
        thickness: 18.0,
        has_kickplate: true,
        kickplate_height: 100.0,
        has_backing: true,
        distribution: DistributionMode::Horizontal,
        primary_count: 3,
        secondary_counts: vec![Some(0); 4],
        ..Default::default()
    });

    assert_eq!(list.summary.total_pieces, 10);
    assert_eq!(list.count(PanelRole::Side), 2);
    assert_eq!(list.count(PanelRole::Roof), 1);
    assert_eq!(list.count(PanelRole::Floor), 1);
    assert_eq!(list.count(PanelRole::Kickplate), 2);
    assert_eq!(list.count(PanelRole::Backing), 1);
    assert_eq!(list.count(PanelRole::PrimaryMember), 3);
    assert_eq!(list.count(PanelRole::SecondaryMember), 0);

    let cut = cut_list(&list);
    let face = |role: PanelRole| {
        let row = cut.rows.iter().find(|r| r.role == role).unwrap();
        (row.length, row.width)
    };
    assert_eq!(face(PanelRole::Side), (1800.0, 500.0));
    assert_eq!(face(PanelRole::Roof), (864.0, 500.0));
    assert_eq!(face(PanelRole::Floor), (864.0, 500.0));
    assert_eq!(face(PanelRole::Kickplate), (864.0, 100.0));
    assert_eq!(face(PanelRole::Backing), (1697.0, 879.0));
    assert_eq!(face(PanelRole::PrimaryMember), (864.0, 480.0));

    let backing = list.by_role(PanelRole::Backing).next().unwrap();
    assert_eq!(backing.material, Material::MDF);
    assert_eq!(backing.thickness(), 3.0);
    println!("Cut list: {} rows, {} pieces", cut.len(), cut.total_pieces);
}

#[test]
fn test_internal_doors_reference() {
    let list = compute(RawCabinetSpec {
        has_doors: true,
        hinge: HingeStyle::Internal,
        door_count: 2,
        ..Default::default()
    });

    assert_relative_eq!(list.clear.height, 1664.0);
    assert_relative_eq!(list.clear.width, 864.0);

    let doors: Vec<_> = list.by_role(PanelRole::Door).collect();
    assert_eq!(doors.len(), 2);
    for door in &doors {
        assert_relative_eq!(door.dimensions.x, 429.0);
        assert_relative_eq!(door.dimensions.y, 1661.0);
        assert_relative_eq!(door.dimensions.z, 18.0);
    }
    assert!(doors[0].center.x < doors[1].center.x);
}

#[test]
fn test_fifty_shelves_overflow() {
    // 50 × 18mm shelves in exactly 900mm of clear height
    let err = compute_from_raw(&RawCabinetSpec {
        height: 900.0 + 100.0 + 36.0,
        primary_count: 50,
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.is_recoverable());
    match err {
        CabinetError::GeometryOverflow {
            level, axis, count, span, ..
        } => {
            assert_eq!(level, Level::Primary);
            assert_eq!(axis, Axis::Y);
            assert_eq!(count, 50);
            assert_relative_eq!(span, 900.0);
        }
        other => panic!("expected GeometryOverflow, got {:?}", other),
    }

    let ok = compute_from_raw(&RawCabinetSpec {
        height: 1036.0,
        primary_count: 49,
        ..Default::default()
    });
    assert!(ok.is_ok());
}

#[test]
fn test_secondary_overflow_names_cell() {
    let err = compute_from_raw(&RawCabinetSpec {
        primary_count: 2,
        secondary_counts: vec![Some(1), Some(60), Some(1)],
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CabinetError::GeometryOverflow {
            level: Level::Secondary,
            axis: Axis::X,
            cell: Some(1),
            ..
        }
    ));
    assert!(err.to_string().contains("cell 1"));
}

#[test]
fn test_vertical_secondary_overflow_names_column() {
    let err = compute_from_raw(&RawCabinetSpec {
        distribution: DistributionMode::Vertical,
        primary_count: 2,
        secondary_counts: vec![Some(3), Some(0), Some(100)],
        ..Default::default()
    })
    .unwrap_err();

    println!("Vertical overflow: {}", err);
    assert!(matches!(
        err,
        CabinetError::GeometryOverflow {
            level: Level::Secondary,
            axis: Axis::Y,
            cell: Some(2),
            count: 100,
            ..
        }
    ));
    assert!(err.is_recoverable());
}

#[test]
fn test_saturated_secondary_counts_are_rejected() {
    for secondary_counts in [
        vec![Some(i64::MAX)],
        vec![Some(u32::MAX as i64), Some(u32::MAX as i64)],
    ] {
        let primary_count = secondary_counts.len() as i64 - 1;
        let err = compute_from_raw(&RawCabinetSpec {
            primary_count,
            secondary_counts,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CabinetError::GeometryOverflow {
                level: Level::Secondary,
                cell: Some(0),
                count: u32::MAX,
                ..
            }
        ));
    }
}

#[test]
fn test_invalid_dimension_stops_early() {
    let err = compute_from_raw(&RawCabinetSpec {
        depth: -1.0,
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, CabinetError::InvalidDimension { field: "depth", .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_panel_order_is_fixed() {
    let list = compute(RawCabinetSpec {
        primary_count: 1,
        secondary_counts: vec![Some(2), Some(1)],
        has_doors: true,
        ..Default::default()
    });

    let roles: Vec<PanelRole> = list.iter().map(|p| p.role).collect();
    assert_eq!(
        roles,
        vec![
            PanelRole::Side,
            PanelRole::Roof,
            PanelRole::Floor,
            PanelRole::Kickplate,
            PanelRole::Backing,
            PanelRole::PrimaryMember,
            PanelRole::SecondaryMember,
            PanelRole::SecondaryMember,
            PanelRole::SecondaryMember,
            PanelRole::Door,
            PanelRole::Door,
        ]
    );

    let cells: Vec<Option<usize>> = list
        .by_role(PanelRole::SecondaryMember)
        .map(|p| p.cell)
        .collect();
    assert_eq!(cells, vec![Some(0), Some(0), Some(1)]);
}

#[test]
fn test_zero_primary_keeps_secondary_in_single_cell() {
    let list = compute(RawCabinetSpec {
        primary_count: 0,
        secondary_counts: vec![Some(3)],
        ..Default::default()
    });

    assert_eq!(list.count(PanelRole::PrimaryMember), 0);
    assert_eq!(list.count(PanelRole::SecondaryMember), 3);
    // Full clear height: dividers run from floor to roof
    for divider in list.by_role(PanelRole::SecondaryMember) {
        assert_relative_eq!(divider.dimensions.y, list.clear.height);
    }
}

#[test]
fn test_over_roof_and_no_kickplate() {
    let list = compute(RawCabinetSpec {
        roof: RoofStyle::Over,
        has_kickplate: false,
        has_backing: false,
        ..Default::default()
    });

    let roof = list.by_role(PanelRole::Roof).next().unwrap();
    let side = list.by_role(PanelRole::Side).next().unwrap();
    assert_relative_eq!(roof.dimensions.x, 900.0);
    assert_relative_eq!(side.dimensions.y, 1782.0);
    assert_eq!(list.count(PanelRole::Kickplate), 0);
    assert_eq!(list.count(PanelRole::Backing), 0);
    assert_relative_eq!(list.clear.depth, 500.0);
    assert_eq!(list.summary.total_pieces, 2 + 1 + 1 + 3);
}

#[test]
fn test_vertical_mode_dividers() {
    let list = compute(RawCabinetSpec {
        distribution: DistributionMode::Vertical,
        primary_count: 1,
        secondary_counts: vec![Some(2), Some(0)],
        ..Default::default()
    });

    let divider = list.by_role(PanelRole::PrimaryMember).next().unwrap();
    assert_relative_eq!(divider.dimensions.x, 18.0);
    assert_relative_eq!(divider.dimensions.y, list.clear.height);
    assert_relative_eq!(divider.center.x, 0.0, epsilon = 1e-9);

    // Left column is (864 - 18) / 2 = 423 wide
    for shelf in list.by_role(PanelRole::SecondaryMember) {
        assert_relative_eq!(shelf.dimensions.x, 423.0);
        assert!(shelf.center.x < 0.0);
        assert_eq!(shelf.cell, Some(0));
    }
}

#[test]
fn test_compute_twice_is_identical() {
    let spec = normalize(&RawCabinetSpec {
        primary_count: 4,
        secondary_counts: vec![Some(1), Some(2), Some(0), Some(3), Some(1)],
        has_doors: true,
        hinge: HingeStyle::Central,
        door_count: 3,
        ..Default::default()
    })
    .unwrap();

    let first = compute_panels(&spec).unwrap();
    let second = compute_panels(&spec).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}
