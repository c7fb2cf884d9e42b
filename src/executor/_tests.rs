#[cfg(test)]
pub mod fixtures {
    use serde::Serialize;
    use serde_json::{json, Value};

    use crate::element::Attributes;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Spacecraft {
        pub name: String,
        pub cospar_id: Option<String>,
        pub satcat: Option<u32>,
    }

    pub fn spacecrafts() -> Vec<Value> {
        let rows = json!([
            { "name": "Kepler",    "cospar_id": "2009-011A", "satcat": 34380 },
            { "name": "GRAIL (A)", "cospar_id": "2011-046",  "satcat": 37801 },
            { "name": "InSight",   "cospar_id": "2018-042a", "satcat": 43457 },
            { "name": "lucy",      "cospar_id": "2021-093A", "satcat": 49328 },
            { "name": "Psyche",    "cospar_id": null,        "satcat": null  }
        ]);
        rows.as_array().cloned().unwrap_or_default()
    }

    pub fn spacecraft_properties() -> Vec<Value> {
        let rows = json!([
            { "name": "Kepler",    "dimension": [4.7, 2.7, null], "power": 1100, "launch_mass": 1052.4 },
            { "name": "GRAIL (A)", "launch_mass": 202.4 },
            { "name": "InSight",   "dimension": [6, 1.56, 1],     "power": 600,  "launch_mass": 694 },
            { "name": "lucy",      "dimension": [13, null, null], "power": 504,  "launch_mass": 1550 }
        ]);
        rows.as_array().cloned().unwrap_or_default()
    }

    /// Same properties keyed by `spacecraft`, in a different order.
    pub fn properties_by_spacecraft() -> Vec<Value> {
        let rows = json!([
            { "spacecraft": "GRAIL (A)", "launch_mass": 202.4 },
            { "spacecraft": "InSight",   "dimension": [6, 1.56, 1],     "power": 600,  "launch_mass": 694 },
            { "spacecraft": "lucy",      "dimension": [13, null, null], "power": 504,  "launch_mass": 1550 },
            { "spacecraft": "Kepler",    "dimension": [4.7, 2.7, null], "power": 1100, "launch_mass": 1052.4 }
        ]);
        rows.as_array().cloned().unwrap_or_default()
    }

    pub fn spacecraft_objects() -> Vec<Attributes<Spacecraft>> {
        let craft = |name: &str, cospar_id: Option<&str>, satcat: Option<u32>| {
            Attributes(Spacecraft { name: name.into(), cospar_id: cospar_id.map(Into::into), satcat })
        };
        vec![
            craft("Kepler", Some("2009-011A"), Some(34380)),
            craft("GRAIL (A)", Some("2011-046"), Some(37801)),
            craft("InSight", Some("2018-042a"), Some(43457)),
            craft("lucy", Some("2021-093A"), Some(49328)),
            craft("Psyche", None, None),
        ]
    }

    /// Positional launch records: `[name, launch_year]`.
    pub fn launches() -> Vec<Vec<Value>> {
        vec![
            vec![json!("lucy"), json!(2021)],
            vec![json!("Kepler"), json!(2009)],
            vec![json!("Psyche"), json!(2023)],
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::{json, Value};

    use super::fixtures::*;
    use crate::{
        aggregate::{slot_cloned, Aggregate},
        config::Config,
        diagnostics::CollectingSink,
        element::{Element, Key},
        on, JoinError, JoinOn, Side,
    };

    fn lower_name(e: &dyn Element) -> Option<Value> {
        e.field("name")?.as_str().map(|s| json!(s.to_lowercase()))
    }

    fn same_slot(a: Option<&dyn Element>, b: Option<&dyn Element>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => std::ptr::addr_eq(x, y),
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn single_collection_rows_are_one_wide() {
        let spacecrafts = spacecrafts();
        let rows = on(&spacecrafts).all();
        assert_eq!(rows.len(), spacecrafts.len());
        for (row, craft) in rows.iter().zip(&spacecrafts) {
            assert_eq!(row.width(), 1);
            assert_eq!(row.get_as::<Value>(0), Some(craft));
        }

        let first = (&on(&spacecrafts)).into_iter().next().unwrap();
        assert_eq!(first.get_as::<Value>(0), Some(&spacecrafts[0]));
    }

    #[test]
    fn join_on_a_simple_key() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let rows = on(&spacecrafts).join(&properties, JoinOn::key("name")).unwrap().all();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].get_as::<Value>(1), Some(&properties[0]));
        assert_eq!(rows[3].get_as::<Value>(0), Some(&spacecrafts[3]));
        assert_eq!(rows[3].get_as::<Value>(1), Some(&properties[3]));
        // Psyche has no counterpart
        assert_eq!(rows[4].base().field("name"), Some(json!("Psyche")));
        assert!(rows[4].joined(0).is_none());
        assert!(rows.iter().all(|r| r.width() == 2));
    }

    #[test]
    fn join_on_a_function() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let rows = on(&spacecrafts)
            .join(&properties, JoinOn::key(Key::func(lower_name)))
            .unwrap()
            .all();
        assert_eq!(rows[0].get_as::<Value>(1), Some(&properties[0]));
        assert_eq!(rows[3].get_as::<Value>(1), Some(&properties[3]));
    }

    #[test]
    fn join_without_keys_fails_before_evaluation() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let err = on(&spacecrafts).join(&properties, JoinOn::new()).unwrap_err();
        assert_eq!(err, JoinError::MissingKey { position: 0 });

        let err = on(&spacecrafts)
            .join(&properties, JoinOn::key("name").with_right("name"))
            .unwrap_err();
        assert_eq!(err, JoinError::KeyWithLeftRight { position: 0 });

        let err = on(&spacecrafts)
            .join(&properties, JoinOn::new().with_left("name"))
            .unwrap_err();
        assert_eq!(err, JoinError::OneSided { position: 0, given: Side::Left });
    }

    #[test]
    fn left_and_right_keys_with_mixed_descriptors() {
        let spacecrafts = spacecrafts();
        let properties = properties_by_spacecraft();
        let rows = on(&spacecrafts)
            .join(&properties, JoinOn::left_right(Key::func(|e| e.field("name")), "spacecraft"))
            .unwrap()
            .all();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].base().field("name"), Some(json!("Kepler")));
        assert_eq!(rows[0].joined(0).and_then(|e| e.field("spacecraft")), Some(json!("Kepler")));
        assert_eq!(rows[4].base().field("name"), Some(json!("Psyche")));
        assert!(rows[4].joined(0).is_none());
    }

    #[test]
    fn join_collection_of_objects_with_dicts() {
        let spacecrafts = spacecraft_objects();
        let properties = properties_by_spacecraft();
        let rows = on(&spacecrafts)
            .join(&properties, JoinOn::left_right("name", "spacecraft"))
            .unwrap()
            .all();

        assert_eq!(rows.len(), 5);
        let kepler = rows[0].get_as::<crate::element::Attributes<Spacecraft>>(0).unwrap();
        assert_eq!(kepler.name, "Kepler");
        assert_eq!(rows[0].joined(0).and_then(|e| e.field("spacecraft")), Some(json!("Kepler")));
        assert_eq!(rows[4].base().field("name"), Some(json!("Psyche")));
        assert!(rows[4].joined(0).is_none());
    }

    #[test]
    fn empty_joined_collection_gives_null_slots() {
        let spacecrafts = spacecrafts();
        let nothing: Vec<Value> = vec![];
        let rows = on(&spacecrafts).join(&nothing, JoinOn::key("name")).unwrap().all();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.width() == 2 && r.joined(0).is_none()));
    }

    #[test]
    fn empty_base_collection_gives_no_rows() {
        let nothing: Vec<Value> = vec![];
        let properties = spacecraft_properties();
        let q = on(&nothing).join(&properties, JoinOn::key("name")).unwrap();
        assert!(q.all().is_empty());
        assert_eq!(q.iter().count(), 0);
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let base = vec![json!({"id": 1})];
        let joined = vec![
            json!({"id": 2, "n": "a"}),
            json!({"id": 1, "n": "first"}),
            json!({"id": 1, "n": "second"}),
        ];
        for config in [Config::scan(), Config::hash_index()] {
            let rows = on(&base)
                .with_config(config)
                .join(&joined, JoinOn::key("id"))
                .unwrap()
                .all();
            assert!(std::ptr::eq(rows[0].get_as::<Value>(1).unwrap(), &joined[1]));
        }
    }

    #[test]
    fn several_joins_keep_declaration_order() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let launches = launches();
        let q = on(&spacecrafts)
            .join(&launches, JoinOn::left_right("name", 0usize))
            .unwrap()
            .join(&properties, JoinOn::key("name"))
            .unwrap();

        let rows = q.all();
        assert!(rows.iter().all(|r| r.width() == 3));
        // Kepler: launch + properties
        assert_eq!(rows[0].joined(0).and_then(|e| e.at(1)), Some(json!(2009)));
        assert_eq!(rows[0].get_as::<Value>(2), Some(&properties[0]));
        // GRAIL (A): properties only
        assert!(rows[1].joined(0).is_none());
        assert!(rows[1].is_matched(1));
        // Psyche: launch only
        assert_eq!(rows[4].joined(0).and_then(|e| e.at(1)), Some(json!(2023)));
        assert!(rows[4].joined(1).is_none());
    }

    #[test]
    fn heterogeneous_collections_read_later_shapes_as_no_value() {
        // mode comes from the first element: later scalars never match
        let base = vec![json!({"id": 1}), json!("not a record"), json!({"id": 2})];
        let joined = vec![json!({"id": 2}), json!({"id": 1})];
        let rows = on(&base).join(&joined, JoinOn::key("id")).unwrap().all();
        assert_eq!(rows.len(), 3);
        assert!(std::ptr::eq(rows[0].get_as::<Value>(1).unwrap(), &joined[1]));
        assert!(rows[1].joined(0).is_none());
        assert!(std::ptr::eq(rows[2].get_as::<Value>(1).unwrap(), &joined[0]));
    }

    #[test]
    fn evaluating_twice_gives_identical_rows() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let q = on(&spacecrafts).join(&properties, JoinOn::key("name")).unwrap();

        let (first, second) = (q.all(), q.all());
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert!(a.slots().zip(b.slots()).all(|pair| same_slot(pair.0, pair.1)));
        }
    }

    #[test]
    fn hash_index_and_scan_agree() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let launches = launches();
        let build = |config: Config| {
            on(&spacecrafts)
                .with_config(config)
                .join(&properties, JoinOn::key("name"))
                .unwrap()
                .join(&launches, JoinOn::left_right("name", 0usize))
                .unwrap()
                .join(&properties, JoinOn::left_right("satcat", "power"))
                .unwrap()
        };
        let scan = build(Config::scan()).all();
        let indexed = build(Config::hash_index()).all();
        assert_eq!(scan.len(), indexed.len());
        for (a, b) in scan.iter().zip(&indexed) {
            for slot in 0..a.width() {
                assert!(same_slot(a.get(slot), b.get(slot)), "slot {slot} differs");
            }
        }
    }

    #[derive(Default, Debug)]
    struct Global {
        spacecraft: Option<Value>,
        properties: Option<Value>,
        launch_mass: Option<f64>,
        hook_calls: usize,
    }

    impl Aggregate for Global {
        const FIELDS: &'static [&'static str] = &["spacecraft", "properties"];

        fn set_field(&mut self, name: &str, value: Option<&dyn Element>) {
            match name {
                "spacecraft" => self.spacecraft = slot_cloned(value),
                "properties" => self.properties = slot_cloned(value),
                _ => {}
            }
        }

        fn post_populate(&mut self) {
            self.hook_calls += 1;
            self.launch_mass = self
                .properties
                .as_ref()
                .and_then(|p| p.get("launch_mass"))
                .and_then(Value::as_f64);
        }
    }

    #[test]
    fn as_aggregate_builds_one_instance_per_row() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let sink = Rc::new(CollectingSink::new());
        let q = on(&spacecrafts)
            .with_diagnostics(sink.clone())
            .join(&properties, JoinOn::key("name"))
            .unwrap();

        let globals: Vec<Global> = q.as_aggregate(&["spacecraft", "properties"]);
        assert_eq!(globals.len(), 5);
        assert!(globals.iter().all(|g| g.hook_calls == 1));
        assert_eq!(globals[0].launch_mass, Some(1052.4));
        assert_eq!(globals[4].spacecraft.as_ref().and_then(|s| s.get("name")), Some(&json!("Psyche")));
        assert!(globals[4].properties.is_none());
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn as_aggregate_skips_unknown_fields_with_a_warning_per_instance() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let sink = Rc::new(CollectingSink::new());
        let q = on(&spacecrafts)
            .with_diagnostics(sink.clone())
            .join(&properties, JoinOn::key("name"))
            .unwrap();

        let globals: Vec<Global> = q.as_aggregate(&["spacecraft", "props"]);
        assert_eq!(globals.len(), 5);
        assert!(globals.iter().all(|g| g.properties.is_none() && g.spacecraft.is_some()));
        assert!(globals.iter().all(|g| g.hook_calls == 1));
        assert_eq!(sink.warnings().len(), 5);
        assert!(sink.warnings()[0].contains("'props'"));
    }

    #[test]
    fn iter_aggregate_is_lazy() {
        let spacecrafts = spacecrafts();
        let properties = spacecraft_properties();
        let q = on(&spacecrafts).join(&properties, JoinOn::key("name")).unwrap();
        let mut globals = q.iter_aggregate::<Global>(&["spacecraft", "properties"]);
        let first = globals.next().unwrap();
        assert_eq!(first.launch_mass, Some(1052.4));
        assert_eq!(globals.size_hint().0, 4);
    }
}
