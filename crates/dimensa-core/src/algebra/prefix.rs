//! Prefix selection
//!
//! A prefix is rated by the magnitude of the value it produces. Values inside
//! the configured window rate as their magnitude, values outside it rate as
//! the window's upper bound, and any prefix pays a fixed penalty. The unit's
//! default prefix (kilo for the gram) always rates best. Lowest rating wins.

use crate::catalog::{Catalog, PrefixId, PrefixKind, UnitId, UnitKind};
use crate::error::Result;
use crate::number::Numeric;
use crate::settings::Settings;

use super::Dimension;

/// Prefixes `unit` may take under `settings`, in catalog order
pub fn compatible_prefixes(catalog: &Catalog, settings: &Settings, unit: UnitId) -> Vec<PrefixId> {
    let record = catalog.unit(unit);
    let kinds: &[PrefixKind] = match record.kind {
        UnitKind::Si if settings.use_unofficial_prefixes => {
            &[PrefixKind::Si, PrefixKind::SiUnofficial]
        }
        UnitKind::Si => &[PrefixKind::Si],
        UnitKind::Binary if settings.prefer_binary_prefixes => &[PrefixKind::SiBinary],
        UnitKind::Binary => &[PrefixKind::Si],
        _ => &[],
    };

    catalog
        .prefixes()
        .filter(|(id, prefix)| {
            let whitelisted = record.extra_prefixes.contains(id) || record.default_prefix == Some(*id);
            // unofficial prefixes are gated by their own flag only
            let allowed_rare =
                settings.use_rare_prefixes || prefix.kind == PrefixKind::SiUnofficial;
            whitelisted || (kinds.contains(&prefix.kind) && (!prefix.rare || allowed_rare))
        })
        .map(|(id, _)| id)
        .collect()
}

/// Rating of a value shown with `prefix` on `unit`; lower is better
pub fn rating(
    catalog: &Catalog,
    settings: &Settings,
    unit: UnitId,
    prefix: Option<PrefixId>,
    magnitude: f64,
) -> f64 {
    if prefix.is_some() && prefix == catalog.unit(unit).default_prefix {
        return 0.0;
    }
    let base = if (settings.lower_prefix_value..=settings.upper_prefix_value).contains(&magnitude) {
        magnitude
    } else {
        settings.upper_prefix_value
    };
    match prefix {
        Some(_) => base + settings.having_prefix_score_offset,
        None => base,
    }
}

/// Best prefix for `value`, given in unprefixed `unit` raised to `power`.
/// `None` means the bare unit rates best.
pub fn find_prefix<T: Numeric>(
    catalog: &Catalog,
    settings: &Settings,
    value: &T,
    unit: UnitId,
    power: i32,
) -> Result<Option<PrefixId>> {
    settings.validate()?;

    let mut best = None;
    let mut best_rating = rating(catalog, settings, unit, None, value.magnitude());
    for prefix in compatible_prefixes(catalog, settings, unit) {
        let multiplier = catalog.prefix(prefix).multiplier();
        let scaled = apply_prefix(value, power, multiplier);
        let candidate = rating(catalog, settings, unit, Some(prefix), scaled.magnitude());
        if candidate < best_rating {
            best = Some(prefix);
            best_rating = candidate;
        }
    }
    Ok(best)
}

/// Re-express an unprefixed value with a prefix of `multiplier`, once per
/// unit of `|power|`
pub fn apply_prefix<T: Numeric>(value: &T, power: i32, multiplier: f64) -> T {
    let mut value = value.clone();
    for _ in 0..power.unsigned_abs() {
        value = if power > 0 {
            value.div_scalar(multiplier)
        } else {
            value.mul_scalar(multiplier)
        };
    }
    value
}

/// Inverse of [`apply_prefix`]
pub fn remove_prefix<T: Numeric>(value: &T, power: i32, multiplier: f64) -> T {
    apply_prefix(value, -power, multiplier)
}

/// Choose a prefix for the first positive-power dimension whose unit takes
/// prefixes, replacing any prefix it already carries.
pub(crate) fn prefix_best<T: Numeric>(
    catalog: &Catalog,
    settings: &Settings,
    mut dimensions: Vec<Dimension>,
    value: T,
) -> Result<(Vec<Dimension>, T)> {
    let Some(index) = dimensions.iter().position(|d| {
        d.power > 0 && !compatible_prefixes(catalog, settings, d.unit).is_empty()
    }) else {
        return Ok((dimensions, value));
    };

    let dimension = dimensions[index];
    let value = match dimension.prefix {
        Some(p) => remove_prefix(&value, dimension.power, catalog.prefix(p).multiplier()),
        None => value,
    };
    let prefix = find_prefix(catalog, settings, &value, dimension.unit, dimension.power)?;
    let value = match prefix {
        Some(p) => apply_prefix(&value, dimension.power, catalog.prefix(p).multiplier()),
        None => value,
    };
    dimensions[index] = dimension.with_prefix(prefix);

    if prefix.is_some() && index > 0 && settings.allow_reordering_dimensions {
        let moved = dimensions.remove(index);
        dimensions.insert(0, moved);
    }
    Ok((dimensions, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, Settings) {
        (Catalog::standard().unwrap(), Settings::default())
    }

    fn best(catalog: &Catalog, settings: &Settings, value: f64, unit: &str) -> Option<String> {
        let unit = catalog.unit_id(unit).unwrap();
        find_prefix(catalog, settings, &value, unit, 1)
            .unwrap()
            .map(|p| catalog.prefix(p).key.clone())
    }

    #[test]
    fn test_mega_for_large_values() {
        let (c, s) = setup();
        assert_eq!(best(&c, &s, 1.5e6, "meter").as_deref(), Some("mega"));
        assert_eq!(best(&c, &s, 2500.0, "meter").as_deref(), Some("kilo"));
        assert_eq!(best(&c, &s, 0.004, "meter").as_deref(), Some("milli"));
    }

    #[test]
    fn test_bare_unit_inside_window() {
        let (c, s) = setup();
        assert_eq!(best(&c, &s, 250.0, "meter"), None);
        assert_eq!(best(&c, &s, 1.0, "meter"), None);
    }

    #[test]
    fn test_default_prefix_wins() {
        let (c, s) = setup();
        assert_eq!(best(&c, &s, 1000.0, "gram").as_deref(), Some("kilo"));
        assert_eq!(best(&c, &s, 5.0, "gram").as_deref(), Some("kilo"));
    }

    #[test]
    fn test_rare_prefixes_need_setting_or_whitelist() {
        let (c, s) = setup();
        let meter = c.unit_id("meter").unwrap();
        let kelvin = c.unit_id("kelvin").unwrap();
        let centi = c.prefix_id("centi").unwrap();
        let hecto = c.prefix_id("hecto").unwrap();
        assert!(compatible_prefixes(&c, &s, meter).contains(&centi));
        assert!(!compatible_prefixes(&c, &s, meter).contains(&hecto));
        assert!(!compatible_prefixes(&c, &s, kelvin).contains(&centi));

        let rare = Settings {
            use_rare_prefixes: true,
            ..Settings::default()
        };
        assert!(compatible_prefixes(&c, &rare, kelvin).contains(&hecto));
    }

    #[test]
    fn test_unofficial_prefixes_follow_their_flag() {
        let (c, s) = setup();
        let meter = c.unit_id("meter").unwrap();
        let myria = c.prefix_id("myria").unwrap();
        let hecto = c.prefix_id("hecto").unwrap();
        assert!(!compatible_prefixes(&c, &s, meter).contains(&myria));

        let unofficial = Settings {
            use_unofficial_prefixes: true,
            upper_prefix_value: 10.0,
            ..Settings::default()
        };
        let prefixes = compatible_prefixes(&c, &unofficial, meter);
        assert!(prefixes.contains(&myria));
        assert!(!prefixes.contains(&hecto));
        assert_eq!(best(&c, &unofficial, 50000.0, "meter").as_deref(), Some("myria"));
        assert_eq!(best(&c, &s, 50000.0, "meter").as_deref(), Some("kilo"));
    }

    #[test]
    fn test_prefix_offset_favours_bare_unit() {
        let (c, s) = setup();
        let meter = c.unit_id("meter").unwrap();
        let kilo = c.prefix_id("kilo").unwrap();
        assert_eq!(rating(&c, &s, meter, Some(kilo), 2.5), 3.5);
        assert_eq!(best(&c, &s, 2500.0, "meter").as_deref(), Some("kilo"));

        // 2500 m rates 1000 bare against 2.5 + 998 as km
        let costly = Settings {
            having_prefix_score_offset: 998.0,
            ..Settings::default()
        };
        assert_eq!(best(&c, &costly, 2500.0, "meter"), None);
        assert_eq!(best(&c, &costly, 1.5e6, "meter").as_deref(), Some("mega"));
    }

    #[test]
    fn test_binary_units() {
        let (c, s) = setup();
        assert_eq!(best(&c, &s, 4096.0, "byte").as_deref(), Some("kibi"));

        let decimal = Settings {
            prefer_binary_prefixes: false,
            ..Settings::default()
        };
        assert_eq!(best(&c, &decimal, 4096.0, "byte").as_deref(), Some("kilo"));
    }

    #[test]
    fn test_customary_units_take_no_prefix() {
        let (c, s) = setup();
        let foot = c.unit_id("foot").unwrap();
        assert!(compatible_prefixes(&c, &s, foot).is_empty());
        assert_eq!(best(&c, &s, 1e9, "foot"), None);
    }

    #[test]
    fn test_squared_prefix() {
        let (c, s) = setup();
        let meter = c.unit_id("meter").unwrap();
        let prefix = find_prefix(&c, &s, &2.0e6, meter, 2).unwrap();
        assert_eq!(prefix, Some(c.prefix_id("kilo").unwrap()));
        assert_eq!(apply_prefix(&2.0e6, 2, 1000.0), 2.0);
        assert_eq!(remove_prefix(&2.0, 2, 1000.0), 2.0e6);
    }

    #[test]
    fn test_invalid_window_rejected() {
        let (c, _) = setup();
        let bad = Settings {
            upper_prefix_value: 1.0,
            lower_prefix_value: 10.0,
            ..Settings::default()
        };
        let meter = c.unit_id("meter").unwrap();
        assert!(find_prefix(&c, &bad, &5.0, meter, 1).is_err());
    }

    #[test]
    fn test_prefixed_dimension_moves_to_front() {
        let (c, s) = setup();
        let second = Dimension::with_power(c.unit_id("second").unwrap(), -1);
        let foot = Dimension::new(c.unit_id("foot").unwrap());
        let meter = Dimension::new(c.unit_id("meter").unwrap());

        let (dims, value) = prefix_best(&c, &s, vec![foot, second, meter], 5000.0).unwrap();
        assert_eq!(dims[0].unit, meter.unit);
        assert_eq!(dims[0].prefix, Some(c.prefix_id("kilo").unwrap()));
        assert_eq!(dims[1], foot);
        assert_eq!(value, 5.0);

        let fixed = Settings {
            allow_reordering_dimensions: false,
            ..Settings::default()
        };
        let (dims, _) = prefix_best(&c, &fixed, vec![foot, meter], 5000.0).unwrap();
        assert_eq!(dims[0], foot);
    }
}
