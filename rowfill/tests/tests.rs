#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use std::path::Path;
    use test_case::test_case;

    use printnest::entities::{DesignItem, SheetParams, SheetSize};
    use printnest::geometry::Rotation;
    use printnest::io::ext_repr::{ExtInstance, LayoutResult, PlacementStatus};
    use printnest::io::import::import;
    use printnest::util::assertions::layout_result_is_valid;
    use rowfill::config::RowFillConfig;
    use rowfill::io::{read_instance, resolve_items};
    use rowfill::opt::row_packer::{RowCursor, row_candidate};
    use rowfill::opt::scheduler::pack;
    use rowfill::strategy::select;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    fn squares(n: usize, size: f32) -> Vec<DesignItem> {
        (0..n)
            .map(|i| DesignItem::new(format!("sq_{i}"), "square", size, size))
            .collect()
    }

    fn run(items: &[DesignItem], params: SheetParams, config: &RowFillConfig) -> LayoutResult {
        init_logger();
        let instance = import(items, params).unwrap();
        let result = pack(instance, config, "test");
        assert!(layout_result_is_valid(&result, &params));
        result
    }

    #[test]
    fn simple_fit() {
        let items = vec![
            DesignItem::new("a", "a", 50.0, 30.0),
            DesignItem::new("b", "b", 40.0, 40.0),
        ];
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert!(result.success);
        assert_eq!(result.status, PlacementStatus::Complete);
        assert_eq!(result.sheets_used, 1);
        assert!(result.placements.iter().all(|p| p.sheet == 1));
        assert!(result.unplaced.is_empty());

        //largest first, side by side in the first row
        let b = &result.placements[0];
        let a = &result.placements[1];
        assert_eq!((b.id.as_str(), b.x, b.y), ("b", 10.0, 10.0));
        assert_eq!((a.id.as_str(), a.x, a.y), ("a", 55.0, 10.0));

        let efficiency = 3100.0 / (210.0 * 297.0) * 100.0;
        let usable_efficiency = 3100.0 / (190.0 * 277.0) * 100.0;
        assert!(approx_eq!(f32, result.efficiency, efficiency, epsilon = 1e-3));
        assert!(approx_eq!(f32, result.usable_efficiency, usable_efficiency, epsilon = 1e-3));
        assert!(result.message.contains("2/2"));
    }

    #[test]
    fn rotation_when_only_turned_item_fits() {
        let items = vec![DesignItem::new("wide", "banner", 250.0, 40.0)];
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert_eq!(result.placements.len(), 1);
        let p = &result.placements[0];
        assert_eq!(p.rotation, Rotation::Quarter);
        assert_eq!((p.width, p.height), (40.0, 250.0));
    }

    #[test]
    fn no_rotation_when_disallowed() {
        let items = vec![DesignItem::new("wide", "banner", 250.0, 40.0)];
        let config = RowFillConfig {
            allow_rotation: false,
            ..RowFillConfig::default()
        };
        let result = run(&items, SheetParams::default(), &config);

        assert!(result.placements.is_empty());
        assert_eq!(result.unplaced, vec!["wide".to_string()]);
        assert_eq!(result.status, PlacementStatus::NothingPlaced);
        assert!(!result.success);
    }

    #[test_case(20, 100.0; "20 squares of 100mm")]
    #[test_case(50, 40.0; "50 squares of 40mm")]
    #[test_case(7, 150.0; "7 squares of 150mm")]
    fn overflow_to_new_sheets(n_items: usize, size: f32) {
        let items = squares(n_items, size);
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert_eq!(result.placements.len(), n_items);
        assert_eq!(result.status, PlacementStatus::Complete);
        //sheets are numbered consecutively from 1
        let mut indices = result.placements.iter().map(|p| p.sheet).collect::<Vec<_>>();
        indices.dedup();
        assert_eq!(indices, (1..=result.sheets_used).collect::<Vec<_>>());
    }

    #[test]
    fn overflow_of_20_squares_needs_at_least_5_sheets() {
        let result = run(&squares(20, 100.0), SheetParams::default(), &RowFillConfig::default());
        assert!(result.sheets_used >= 5);
        assert_eq!(result.sheets.iter().map(|s| s.item_count).sum::<usize>(), 20);
    }

    #[test]
    fn oversized_item_terminates() {
        let items = vec![
            DesignItem::new("huge", "wall", 1000.0, 1000.0),
            DesignItem::new("small", "card", 85.0, 55.0),
        ];
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert!(result.success);
        assert_eq!(result.status, PlacementStatus::Partial);
        assert_eq!(result.sheets_used, 1);
        assert_eq!(result.unplaced, vec!["huge".to_string()]);
        assert!(result.processing_notes.iter().any(|n| n.contains("huge")));
    }

    #[test_case(190.0, true; "exactly the usable width")]
    #[test_case(190.0009, false; "past the usable width by less than the tolerance")]
    fn usable_edge_is_a_hard_limit(width: f32, placed: bool) {
        let items = vec![DesignItem::new("wide", "banner", width, 277.0)];
        let params = SheetParams::default();
        let result = run(&items, params, &RowFillConfig::default());

        assert_eq!(result.placements.len(), usize::from(placed));
        for p in &result.placements {
            assert!(p.x + p.width <= params.sheet_width - params.margin);
            assert!(p.y + p.height <= params.sheet_height - params.margin);
        }
        if !placed {
            assert_eq!(result.unplaced, vec!["wide".to_string()]);
            assert!(result.processing_notes.iter().any(|n| n.contains("wide")));
        }
    }

    #[test]
    fn only_oversized_items() {
        let items = vec![DesignItem::new("huge", "wall", 1000.0, 1000.0)];
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert!(!result.success);
        assert_eq!(result.status, PlacementStatus::NothingPlaced);
        assert_eq!(result.sheets_used, 0);
        assert_eq!(result.efficiency, 0.0);
        assert!(result.sheets.is_empty());
    }

    #[test]
    fn empty_request() {
        let result = run(&[], SheetParams::default(), &RowFillConfig::default());

        assert!(result.success);
        assert_eq!(result.status, PlacementStatus::Complete);
        assert!(result.placements.is_empty());
        assert_eq!(result.sheets_used, 0);
        assert_eq!(result.efficiency, 0.0);
    }

    #[test]
    fn invalid_items_are_rejected_not_packed() {
        let items = vec![
            DesignItem::new("flat", "flat", 0.0, 40.0),
            DesignItem::new("nan", "nan", f32::NAN, 40.0),
            DesignItem::new("ok", "ok", 40.0, 40.0),
        ];
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert_eq!(result.placements.len(), 1);
        assert_eq!(result.status, PlacementStatus::Partial);
        assert_eq!(result.unplaced, vec!["flat".to_string(), "nan".to_string()]);
        assert_eq!(
            result
                .processing_notes
                .iter()
                .filter(|n| n.contains("rejected"))
                .count(),
            2
        );
    }

    #[test]
    fn priority_goes_first() {
        let items = vec![
            DesignItem::new("big", "big", 50.0, 50.0),
            DesignItem::new("urgent", "urgent", 20.0, 20.0).with_priority(5.0),
        ];
        let result = run(&items, SheetParams::default(), &RowFillConfig::default());

        assert_eq!(result.placements[0].id, "urgent");
        assert_eq!((result.placements[0].x, result.placements[0].y), (10.0, 10.0));
        assert_eq!(result.placements[1].id, "big");
    }

    #[test]
    fn sheet_cap_stops_scheduler() {
        let config = RowFillConfig {
            max_sheets: Some(3),
            ..RowFillConfig::default()
        };
        let result = run(&squares(20, 100.0), SheetParams::default(), &config);

        assert_eq!(result.sheets_used, 3);
        assert_eq!(result.placements.len(), 6);
        assert_eq!(result.unplaced.len(), 14);
        assert_eq!(result.status, PlacementStatus::Partial);
        assert!(result.processing_notes.iter().any(|n| n.contains("limit")));
    }

    #[test]
    fn zero_spacing_items_touch() {
        let params = SheetParams::new(100.0, 100.0, 0.0, 0.0);
        let result = run(&squares(4, 50.0), params, &RowFillConfig::default());

        assert_eq!(result.sheets_used, 1);
        assert!(approx_eq!(f32, result.efficiency, 100.0, epsilon = 1e-3));
    }

    #[test]
    fn wrap_keeps_cursor_of_skipped_item() {
        let params = SheetParams::default();
        let instance = import(&[], params).unwrap();
        let sheet = instance.sheet;

        let start = RowCursor::new(&sheet);
        let (rect, next) = row_candidate(&sheet, start, 150.0, 50.0).unwrap();
        assert_eq!((rect.x_min, rect.y_min), (10.0, 10.0));
        assert_eq!((next.x, next.y, next.row_height), (165.0, 10.0, 50.0));

        //does not fit the remainder of the row: wraps below the tallest item plus spacing
        let (rect, wrapped) = row_candidate(&sheet, next, 60.0, 20.0).unwrap();
        assert_eq!((rect.x_min, rect.y_min), (10.0, 65.0));
        assert_eq!(wrapped.row_height, 20.0);

        //does not fit at all: no candidate
        assert!(row_candidate(&sheet, next, 60.0, 300.0).is_none());
    }

    #[test]
    fn deterministic_selection() {
        init_logger();
        let items = squares(13, 70.0)
            .into_iter()
            .chain([DesignItem::new("tall", "tall", 30.0, 120.0)])
            .collect::<Vec<_>>();
        let config = RowFillConfig::default();

        let first = select(&items, SheetParams::default(), &config).unwrap();
        let second = select(&items, SheetParams::default(), &config).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn selection_evaluates_all_strategies() {
        init_logger();
        let items = vec![
            DesignItem::new("a", "a", 50.0, 30.0),
            DesignItem::new("b", "b", 40.0, 40.0),
        ];
        let selection = select(&items, SheetParams::default(), &RowFillConfig::default()).unwrap();

        let names = selection
            .results
            .iter()
            .map(|sr| sr.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["standard", "compact", "forced-rotation", "alternate-sheet:A3"]
        );
        //the same area on the same sheet: the first strategy wins the tie
        assert_eq!(selection.best, 0);
        assert_eq!(selection.best().name, "standard");

        let compact = &selection.results[1];
        assert_eq!((compact.sheet.margin, compact.sheet.spacing), (5.0, 2.0));
        let a3 = &selection.results[3];
        assert_eq!((a3.sheet.sheet_width, a3.sheet.sheet_height), (297.0, 420.0));

        for sr in &selection.results {
            assert!(layout_result_is_valid(&sr.result, &sr.sheet));
        }
    }

    #[test]
    fn larger_sheet_selected_when_more_efficient() {
        init_logger();
        let selection =
            select(&squares(20, 100.0), SheetParams::default(), &RowFillConfig::default()).unwrap();

        let best = selection.best();
        assert_eq!(best.name, "alternate-sheet:A3");
        assert_eq!(best.result.sheets_used, 4);
        assert!(
            selection
                .results
                .iter()
                .all(|sr| sr.result.efficiency <= best.result.efficiency)
        );
    }

    #[test]
    fn forced_rotation_reports_rotation_relative_to_design() {
        init_logger();
        let items = vec![DesignItem::new("strip", "strip", 100.0, 30.0)];
        let selection = select(&items, SheetParams::default(), &RowFillConfig::default()).unwrap();

        let forced = selection
            .results
            .iter()
            .find(|sr| sr.name == "forced-rotation")
            .unwrap();
        let p = &forced.result.placements[0];
        assert_eq!(p.rotation, Rotation::Quarter);
        assert_eq!((p.width, p.height), (30.0, 100.0));
    }

    #[test]
    fn invalid_alternate_sheet_is_skipped() {
        init_logger();
        let mut config = RowFillConfig::default();
        config.strategies.alternate_sheets = vec![SheetSize::A5, SheetSize::B2];
        let params = SheetParams::new(500.0, 500.0, 80.0, 5.0);

        let selection = select(&squares(3, 50.0), params, &config).unwrap();

        assert_eq!(selection.notes.len(), 1);
        assert!(selection.notes[0].contains("alternate-sheet:A5"));
        assert!(
            selection
                .results
                .iter()
                .any(|sr| sr.name == "alternate-sheet:B2")
        );
    }

    #[test_case(SheetParams::new(210.0, 297.0, 105.0, 5.0); "margin consumes the sheet")]
    #[test_case(SheetParams::new(0.0, 297.0, 10.0, 5.0); "zero width")]
    #[test_case(SheetParams::new(210.0, 297.0, 10.0, -1.0); "negative spacing")]
    #[test_case(SheetParams::new(f32::INFINITY, 297.0, 10.0, 5.0); "infinite width")]
    fn invalid_sheet_is_refused(params: SheetParams) {
        init_logger();
        assert!(select(&squares(2, 10.0), params, &RowFillConfig::default()).is_err());
    }

    #[test]
    fn duplicate_ids_are_refused() {
        init_logger();
        let items = vec![
            DesignItem::new("x", "x", 10.0, 10.0),
            DesignItem::new("x", "x", 20.0, 20.0),
        ];
        assert!(select(&items, SheetParams::default(), &RowFillConfig::default()).is_err());
    }

    #[test]
    fn demo_request_is_resolved_and_packed() {
        init_logger();
        let path = Path::new("../assets/business_cards.json");
        let ext_instance: ExtInstance = read_instance(path).unwrap();
        let items = resolve_items(ext_instance.items, path.parent().unwrap());

        //the flyer design is not shipped, it is sized from its file name
        let flyer = items.iter().find(|i| i.id == "flyer").unwrap();
        assert_eq!((flyer.width, flyer.height), (210.0, 297.0));

        let selection = select(&items, ext_instance.sheet, &RowFillConfig::default()).unwrap();
        let best = selection.best();
        assert!(best.result.success);
        assert!(layout_result_is_valid(&best.result, &best.sheet));
        //the flyer does not fit within the margins of an A4 sheet
        assert!(best.result.unplaced.len() <= 1);
    }
}
