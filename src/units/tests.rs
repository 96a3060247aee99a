#[cfg(test)]
mod tests {
    use super::super::catalog::{CatalogError, UnitCatalog, CATALOG, UNITS};
    use super::super::definition::UnitDefinition;
    use super::super::magnitude::Magnitude;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_trip_through_base_unit() {
        let samples = [-1000.0, -40.0, -0.5, 0.0, 0.001, 1.0, 3.75, 1609.35, 1.0e6];

        for unit in UNITS.iter() {
            for &x in samples.iter() {
                let back = unit.from_base(unit.to_base(x));
                assert_relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_exactly_one_identity_unit_per_magnitude() {
        for magnitude in Magnitude::ALL {
            let identities: Vec<&UnitDefinition> = CATALOG
                .units_of(magnitude)
                .into_iter()
                .filter(|unit| {
                    [-3.5, 0.0, 1.0, 42.0]
                        .iter()
                        .all(|&x| unit.to_base(x) == x && unit.from_base(x) == x)
                })
                .collect();

            assert_eq!(identities.len(), 1, "magnitude {}", magnitude);
        }

        assert_eq!(CATALOG.base_unit(Magnitude::Length).unwrap().singular, "meter");
        assert_eq!(CATALOG.base_unit(Magnitude::Weight).unwrap().singular, "gram");
        assert_eq!(
            CATALOG.base_unit(Magnitude::Temperature).unwrap().singular,
            "kelvin"
        );
    }

    #[test]
    fn test_resolve_every_form_in_any_case() {
        for unit in UNITS.iter() {
            for form in unit.representations() {
                assert_eq!(CATALOG.resolve(&form), Some(unit), "form {}", form);
                assert_eq!(
                    CATALOG.resolve(&form.to_uppercase()),
                    Some(unit),
                    "form {}",
                    form
                );
            }
        }

        assert_eq!(CATALOG.resolve("Feet").unwrap().singular, "foot");
        assert_eq!(CATALOG.resolve("KM").unwrap().singular, "kilometer");
        assert_eq!(CATALOG.resolve("DC").unwrap().singular, "degree Celsius");
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(CATALOG.resolve("bananas").is_none());
        assert!(CATALOG.resolve("").is_none());
        assert!(CATALOG.resolve("degrees").is_none());
        assert!(CATALOG.resolve("metres").is_none());
    }

    #[test]
    fn test_units_of_magnitude() {
        let lengths: Vec<&str> = CATALOG
            .units_of(Magnitude::Length)
            .iter()
            .map(|unit| unit.singular)
            .collect();
        assert_eq!(
            lengths,
            vec!["meter", "kilometer", "centimeter", "millimeter", "mile", "yard", "foot", "inch"]
        );

        assert_eq!(CATALOG.units_of(Magnitude::Weight).len(), 6);
        assert_eq!(CATALOG.units_of(Magnitude::Temperature).len(), 3);
        assert_eq!(CATALOG.len(), 17);
        assert!(!CATALOG.is_empty());
    }

    #[test]
    fn test_units_follow_table_order() {
        let plurals: Vec<String> = CATALOG.units().map(|unit| unit.to_string()).collect();
        assert_eq!(plurals.first().map(String::as_str), Some("meters"));
        assert_eq!(plurals.last().map(String::as_str), Some("degrees Fahrenheit"));
        assert_eq!(plurals.len(), UNITS.len());
    }

    #[test]
    fn test_known_conversions() {
        let mile = CATALOG.resolve("mi").unwrap();
        let km = CATALOG.resolve("km").unwrap();
        assert_relative_eq!(km.from_base(mile.to_base(1.0)), 1.60935, max_relative = 1e-12);

        let pound = CATALOG.resolve("lb").unwrap();
        let ounce = CATALOG.resolve("oz").unwrap();
        assert_eq!(ounce.from_base(pound.to_base(2.0)), 32.0);

        let celsius = CATALOG.resolve("celsius").unwrap();
        let fahrenheit = CATALOG.resolve("fahrenheit").unwrap();
        assert_relative_eq!(fahrenheit.from_base(celsius.to_base(100.0)), 212.0, epsilon = 1e-9);
        assert_relative_eq!(celsius.from_base(fahrenheit.to_base(-40.0)), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summaries() {
        let all = CATALOG.summaries(None);
        assert_eq!(all.len(), UNITS.len());

        let temperatures = CATALOG.summaries(Some(Magnitude::Temperature));
        assert_eq!(temperatures.len(), 3);
        assert_eq!(temperatures[1].alternates, vec!["c", "dc", "celsius"]);

        let json = serde_json::to_value(&temperatures[0]).unwrap();
        assert_eq!(json["magnitude"], "temperature");
        assert_eq!(json["plural"], "kelvins");
    }

    static CLASHING: [UnitDefinition; 2] = [
        UnitDefinition {
            magnitude: Magnitude::Length,
            singular: "meter",
            plural: "meters",
            alternates: &["m"],
            to_base: |x| x,
            from_base: |x| x,
        },
        UnitDefinition {
            magnitude: Magnitude::Length,
            singular: "mile",
            plural: "miles",
            alternates: &["M"],
            to_base: |x| x * 1609.35,
            from_base: |x| x / 1609.35,
        },
    ];

    #[test]
    fn test_build_rejects_duplicate_representation() {
        let result = UnitCatalog::build(&CLASHING);
        match result {
            Err(CatalogError::DuplicateRepresentation {
                form,
                first,
                second,
            }) => {
                assert_eq!(form, "m");
                assert_eq!(first, "meters");
                assert_eq!(second, "miles");
            }
            Ok(_) => panic!("Expected duplicate representation error"),
        }
    }

    static SHEEP: [UnitDefinition; 1] = [UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "sheep",
        plural: "sheep",
        alternates: &[],
        to_base: |x| x * 45000.0,
        from_base: |x| x / 45000.0,
    }];

    #[test]
    fn test_build_allows_identical_singular_and_plural() {
        let catalog = UnitCatalog::build(&SHEEP).unwrap();
        assert_eq!(catalog.resolve("sheep"), Some(&SHEEP[0]));
    }
}
