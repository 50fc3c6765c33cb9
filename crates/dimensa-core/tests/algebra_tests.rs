//! End-to-end behaviour of conversion, simplification and arithmetic
//! against the built-in catalog

use dimensa_core::{ConversionError, Dimension, Engine, Error, Quantity, Settings};
use pretty_assertions::assert_eq;

fn engine() -> Engine {
    Engine::standard().unwrap()
}

fn engine_with(settings: Settings) -> Engine {
    Engine::standard().unwrap().with_settings(settings).unwrap()
}

fn dims(engine: &Engine, spec: &[(&str, i32)]) -> Vec<Dimension> {
    spec.iter()
        .map(|(name, power)| engine.dimension_by_name(name, *power).unwrap())
        .collect()
}

fn q(engine: &Engine, value: f64, spec: &[(&str, i32)]) -> Quantity<f64> {
    Quantity::new(value, dims(engine, spec))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9 * expected.abs().max(1.0),
        "{actual} != {expected}"
    );
}

#[test]
fn test_minutes_to_seconds() {
    let e = engine();
    let seconds = q(&e, 5.0, &[("minute", 1)])
        .convert_to_unit(&e, "second")
        .unwrap();
    assert_close(*seconds.value(), 300.0);
    assert_eq!(seconds.dimensions(), dims(&e, &[("second", 1)]).as_slice());
}

#[test]
fn test_simple_simplify_cancels_lengths() {
    let e = engine();
    let mixed = q(&e, 30.0, &[("meter", 2), ("inch", 1), ("foot", -1), ("second", 1)]);
    let simple = mixed.simple_simplify(&e).unwrap();
    assert_close(*simple.value(), 2.5);
    assert_eq!(simple.dimensions(), dims(&e, &[("meter", 2), ("second", 1)]).as_slice());
}

#[test]
fn test_speed_derived_only_when_enabled() {
    let e = engine();
    let raw = q(&e, 4.0, &[("meter", 1), ("second", -1)]);
    let derived = raw.simplify(&e).unwrap();
    assert_eq!(derived.dimensions(), dims(&e, &[("meterPerSecond", 1)]).as_slice());
    assert_close(*derived.value(), 4.0);

    let plain = engine_with(Settings {
        allow_derived_dimensions: false,
        ..Settings::default()
    });
    let kept = raw.simplify(&plain).unwrap();
    assert_eq!(kept.dimensions(), raw.dimensions());
}

#[test]
fn test_resistance_subtraction() {
    let e = engine();
    let ohms = q(&e, 12.0, &[("ohm", 1)]);
    let reciprocal = q(&e, 2.0, &[("reciprocalSiemens", 1)]);
    let difference = ohms.sub(&e, &reciprocal).unwrap();
    assert_close(*difference.value(), 10.0);
    assert_eq!(difference.dimensions(), ohms.dimensions());
}

#[test]
fn test_length_to_mass_is_incommensurable() {
    let e = engine();
    let length = q(&e, 1.0, &[("meter", 1)]);
    let err = length.convert_to_unit(&e, "gram").unwrap_err();
    assert_eq!(
        err,
        Error::Incommensurable {
            left: "m".to_string(),
            right: "g".to_string(),
        }
    );
    assert!(length.add(&e, &q(&e, 1.0, &[("second", 1)])).is_err());
}

#[test]
fn test_kilogram_round_trip() {
    let e = engine();
    let kilogram = e.quantity(1.0, "kilogram").unwrap();
    let grams = kilogram.convert_to_unit(&e, "gram").unwrap();
    assert_close(*grams.value(), 1000.0);

    let back = grams.convert_to(&e, &kilogram).unwrap();
    assert_close(*back.value(), 1.0);
    assert_eq!(back.dimensions(), kilogram.dimensions());
    assert_eq!(back.display(&e).to_string(), "1 kg");
}

#[test]
fn test_large_value_gets_mega() {
    let e = engine();
    let distance = q(&e, 1.5e6, &[("meter", 1)]).simplify(&e).unwrap();
    assert_eq!(distance.display(&e).to_string(), "1.5 Mm");
}

#[test]
fn test_grams_displayed_as_kilograms() {
    let e = engine();
    let mass = q(&e, 2500.0, &[("gram", 1)]).simplify(&e).unwrap();
    assert_eq!(mass.display(&e).to_string(), "2.5 kg");
}

#[test]
fn test_force_and_energy() {
    let e = engine();
    let force = q(&e, 2.0, &[("kilogram", 1), ("meter", 1), ("second", -2)])
        .simplify(&e)
        .unwrap();
    assert_eq!(force.dimensions(), dims(&e, &[("newton", 1)]).as_slice());
    assert_close(*force.value(), 2.0);

    let work = force.mul(&e, &q(&e, 3.0, &[("meter", 1)])).unwrap();
    assert_eq!(work.dimensions(), dims(&e, &[("joule", 1)]).as_slice());
    assert_close(*work.value(), 6.0);
}

#[test]
fn test_temperature_offsets() {
    let e = engine();
    let boiling = q(&e, 100.0, &[("celsius", 1)]);
    assert_close(*boiling.convert_to_unit(&e, "fahrenheit").unwrap().value(), 212.0);
    assert_close(*boiling.convert_to_unit(&e, "kelvin").unwrap().value(), 373.15);
}

#[test]
fn test_simplify_is_idempotent() {
    let e = engine();
    let cases = [
        q(&e, 7.0, &[("meter", 1), ("second", -1)]),
        q(&e, 2.0, &[("kilogram", 1), ("meter", 2), ("second", -2)]),
        q(&e, 4096.0, &[("byte", 1), ("second", -1)]),
        q(&e, 12.0, &[("foot", 1), ("inch", 1)]),
        q(&e, 0.25, &[("hour", 1), ("minute", -1)]),
    ];
    for quantity in cases {
        let once = quantity.simplify(&e).unwrap();
        let twice = once.simplify(&e).unwrap();
        assert_eq!(twice.dimensions(), once.dimensions());
        assert_close(*twice.value(), *once.value());
    }
}

#[test]
fn test_commensurability_reflexive_and_symmetric() {
    let e = engine();
    let samples = [
        q(&e, 1.0, &[("meter", 2)]),
        q(&e, 1.0, &[("squareMeter", 1)]),
        q(&e, 1.0, &[("kilometer", 1), ("hour", -1)]),
        q(&e, 1.0, &[("knot", 1)]),
        q(&e, 1.0, &[("newton", 1), ("meter", 1)]),
        q(&e, 1.0, &[("joule", 1)]),
        q(&e, 1.0, &[("second", 1)]),
    ];
    for a in &samples {
        assert!(a.is_commensurable(&e, a).unwrap());
        for b in &samples {
            assert_eq!(
                a.is_commensurable(&e, b).unwrap(),
                b.is_commensurable(&e, a).unwrap()
            );
        }
    }
    assert!(samples[2].is_commensurable(&e, &samples[3]).unwrap());
    assert!(samples[4].is_commensurable(&e, &samples[5]).unwrap());
    assert!(!samples[0].is_commensurable(&e, &samples[6]).unwrap());
}

#[test]
fn test_dimensionless_units_vanish_in_base_systems() {
    let e = engine();
    let share = q(&e, 50.0, &[("percent", 1), ("meter", 1)]);
    let base = share.to_base_systems(&e).unwrap();
    assert_eq!(base.dimensions(), dims(&e, &[("meter", 1)]).as_slice());
    assert_close(*base.value(), 0.5);
}

#[test]
fn test_binary_prefixes() {
    let e = engine();
    let size = q(&e, 3.0 * 1024.0 * 1024.0, &[("byte", 1)]).simplify(&e).unwrap();
    assert_eq!(size.display(&e).to_string(), "3 MiB");

    let decimal = engine_with(Settings {
        prefer_binary_prefixes: false,
        ..Settings::default()
    });
    let size = q(&decimal, 3.0e6, &[("byte", 1)]).simplify(&decimal).unwrap();
    assert_eq!(size.display(&decimal).to_string(), "3 MB");
}

#[test]
fn test_offset_on_vector_value_fails() {
    let e = engine();
    let temperature = Quantity::new(glam::DVec2::new(1.0, 2.0), dims(&e, &[("celsius", 1)]));
    let err = temperature.convert_to_unit(&e, "kelvin").unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion(ConversionError::UnsupportedOffset { .. })
    ));
}
