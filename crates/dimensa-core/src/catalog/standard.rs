//! Built-in catalog
//!
//! To add a unit, add an entry to UNITS. Derived definitions list their
//! fundamental terms and the factor relating their base unit to the product
//! of the terms' base units (the mass base unit is the gram, so the newton
//! is 1000 g·m·s⁻²).

use super::builder::{CatalogBuilder, DefinitionSpec, PrefixSpec, SystemSpec, UnitSpec};
use super::{Catalog, PrefixKind, UnitKind};
use crate::error::Result;

struct SystemRow {
    key: &'static str,
    name: &'static str,
    historical: bool,
    parent: Option<&'static str>,
}

struct PrefixRow {
    key: &'static str,
    symbol: &'static str,
    kind: PrefixKind,
    power: i32,
    rare: bool,
}

struct DefinitionRow {
    key: &'static str,
    name: &'static str,
    symbol: &'static str,
    vector: bool,
    dimensionless: bool,
    /// Empty for fundamental definitions
    terms: &'static [(&'static str, i32)],
    factor: f64,
}

struct UnitRow {
    key: &'static str,
    definition: &'static str,
    name: &'static str,
    plural: &'static str,
    symbol: &'static str,
    multiplier: f64,
    offset: f64,
    kind: UnitKind,
    base: bool,
    rare: bool,
    estimated: bool,
    default_prefix: Option<&'static str>,
    extra_prefixes: &'static [&'static str],
    system: &'static str,
    aliases: &'static [&'static str],
}

const DEFINITION: DefinitionRow = DefinitionRow {
    key: "",
    name: "",
    symbol: "",
    vector: false,
    dimensionless: false,
    terms: &[],
    factor: 1.0,
};

const UNIT: UnitRow = UnitRow {
    key: "",
    definition: "",
    name: "",
    plural: "",
    symbol: "",
    multiplier: 1.0,
    offset: 0.0,
    kind: UnitKind::Si,
    base: false,
    rare: false,
    estimated: false,
    default_prefix: None,
    extra_prefixes: &[],
    system: "si",
    aliases: &[],
};

static SYSTEMS: &[SystemRow] = &[
    SystemRow {
        key: "si",
        name: "International System of Units",
        historical: false,
        parent: None,
    },
    SystemRow {
        key: "customary",
        name: "English customary units",
        historical: true,
        parent: None,
    },
    SystemRow {
        key: "us",
        name: "United States customary units",
        historical: false,
        parent: Some("customary"),
    },
    SystemRow {
        key: "imperial",
        name: "Imperial units",
        historical: false,
        parent: Some("customary"),
    },
];

static PREFIXES: &[PrefixRow] = &[
    PrefixRow { key: "quetta", symbol: "Q", kind: PrefixKind::Si, power: 30, rare: false },
    PrefixRow { key: "ronna", symbol: "R", kind: PrefixKind::Si, power: 27, rare: false },
    PrefixRow { key: "yotta", symbol: "Y", kind: PrefixKind::Si, power: 24, rare: false },
    PrefixRow { key: "zetta", symbol: "Z", kind: PrefixKind::Si, power: 21, rare: false },
    PrefixRow { key: "exa", symbol: "E", kind: PrefixKind::Si, power: 18, rare: false },
    PrefixRow { key: "peta", symbol: "P", kind: PrefixKind::Si, power: 15, rare: false },
    PrefixRow { key: "tera", symbol: "T", kind: PrefixKind::Si, power: 12, rare: false },
    PrefixRow { key: "giga", symbol: "G", kind: PrefixKind::Si, power: 9, rare: false },
    PrefixRow { key: "mega", symbol: "M", kind: PrefixKind::Si, power: 6, rare: false },
    PrefixRow { key: "kilo", symbol: "k", kind: PrefixKind::Si, power: 3, rare: false },
    PrefixRow { key: "hecto", symbol: "h", kind: PrefixKind::Si, power: 2, rare: true },
    PrefixRow { key: "deca", symbol: "da", kind: PrefixKind::Si, power: 1, rare: true },
    PrefixRow { key: "deci", symbol: "d", kind: PrefixKind::Si, power: -1, rare: true },
    PrefixRow { key: "centi", symbol: "c", kind: PrefixKind::Si, power: -2, rare: true },
    PrefixRow { key: "milli", symbol: "m", kind: PrefixKind::Si, power: -3, rare: false },
    PrefixRow { key: "micro", symbol: "µ", kind: PrefixKind::Si, power: -6, rare: false },
    PrefixRow { key: "nano", symbol: "n", kind: PrefixKind::Si, power: -9, rare: false },
    PrefixRow { key: "pico", symbol: "p", kind: PrefixKind::Si, power: -12, rare: false },
    PrefixRow { key: "femto", symbol: "f", kind: PrefixKind::Si, power: -15, rare: false },
    PrefixRow { key: "atto", symbol: "a", kind: PrefixKind::Si, power: -18, rare: false },
    PrefixRow { key: "zepto", symbol: "z", kind: PrefixKind::Si, power: -21, rare: false },
    PrefixRow { key: "yocto", symbol: "y", kind: PrefixKind::Si, power: -24, rare: false },
    PrefixRow { key: "ronto", symbol: "r", kind: PrefixKind::Si, power: -27, rare: false },
    PrefixRow { key: "quecto", symbol: "q", kind: PrefixKind::Si, power: -30, rare: false },
    // Binary: power is the exponent of 2
    PrefixRow { key: "kibi", symbol: "Ki", kind: PrefixKind::SiBinary, power: 10, rare: false },
    PrefixRow { key: "mebi", symbol: "Mi", kind: PrefixKind::SiBinary, power: 20, rare: false },
    PrefixRow { key: "gibi", symbol: "Gi", kind: PrefixKind::SiBinary, power: 30, rare: false },
    PrefixRow { key: "tebi", symbol: "Ti", kind: PrefixKind::SiBinary, power: 40, rare: false },
    PrefixRow { key: "pebi", symbol: "Pi", kind: PrefixKind::SiBinary, power: 50, rare: false },
    PrefixRow { key: "exbi", symbol: "Ei", kind: PrefixKind::SiBinary, power: 60, rare: false },
    // Unofficial
    PrefixRow { key: "myria", symbol: "my", kind: PrefixKind::SiUnofficial, power: 4, rare: true },
    PrefixRow { key: "myrio", symbol: "mo", kind: PrefixKind::SiUnofficial, power: -4, rare: true },
];

static DEFINITIONS: &[DefinitionRow] = &[
    // Fundamental
    DefinitionRow { key: "length", name: "Length", symbol: "L", ..DEFINITION },
    DefinitionRow { key: "mass", name: "Mass", symbol: "M", ..DEFINITION },
    DefinitionRow { key: "time", name: "Time", symbol: "T", ..DEFINITION },
    DefinitionRow { key: "current", name: "Electric current", symbol: "I", ..DEFINITION },
    DefinitionRow { key: "temperature", name: "Temperature", symbol: "Θ", ..DEFINITION },
    DefinitionRow { key: "amount", name: "Amount of substance", symbol: "N", ..DEFINITION },
    DefinitionRow { key: "luminosity", name: "Luminous intensity", symbol: "J", ..DEFINITION },
    DefinitionRow { key: "data", name: "Information", symbol: "D", ..DEFINITION },
    DefinitionRow {
        key: "ratio",
        name: "Ratio",
        symbol: "1",
        dimensionless: true,
        ..DEFINITION
    },
    // Derived
    DefinitionRow {
        key: "area",
        name: "Area",
        symbol: "L²",
        terms: &[("length", 2)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "volume",
        name: "Volume",
        symbol: "L³",
        terms: &[("length", 3)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "speed",
        name: "Speed",
        symbol: "L·T⁻¹",
        terms: &[("length", 1), ("time", -1)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "velocity",
        name: "Velocity",
        symbol: "L·T⁻¹",
        vector: true,
        terms: &[("length", 1), ("time", -1)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "acceleration",
        name: "Acceleration",
        symbol: "L·T⁻²",
        terms: &[("length", 1), ("time", -2)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "frequency",
        name: "Frequency",
        symbol: "T⁻¹",
        terms: &[("time", -1)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "force",
        name: "Force",
        symbol: "M·L·T⁻²",
        terms: &[("mass", 1), ("length", 1), ("time", -2)],
        factor: 1000.0,
        ..DEFINITION
    },
    DefinitionRow {
        key: "energy",
        name: "Energy",
        symbol: "M·L²·T⁻²",
        terms: &[("mass", 1), ("length", 2), ("time", -2)],
        factor: 1000.0,
        ..DEFINITION
    },
    DefinitionRow {
        key: "power",
        name: "Power",
        symbol: "M·L²·T⁻³",
        terms: &[("mass", 1), ("length", 2), ("time", -3)],
        factor: 1000.0,
        ..DEFINITION
    },
    DefinitionRow {
        key: "pressure",
        name: "Pressure",
        symbol: "M·L⁻¹·T⁻²",
        terms: &[("mass", 1), ("length", -1), ("time", -2)],
        factor: 1000.0,
        ..DEFINITION
    },
    DefinitionRow {
        key: "charge",
        name: "Electric charge",
        symbol: "I·T",
        terms: &[("current", 1), ("time", 1)],
        ..DEFINITION
    },
    DefinitionRow {
        key: "voltage",
        name: "Voltage",
        symbol: "M·L²·T⁻³·I⁻¹",
        terms: &[("mass", 1), ("length", 2), ("time", -3), ("current", -1)],
        factor: 1000.0,
        ..DEFINITION
    },
    DefinitionRow {
        key: "resistance",
        name: "Electrical resistance",
        symbol: "M·L²·T⁻³·I⁻²",
        terms: &[("mass", 1), ("length", 2), ("time", -3), ("current", -2)],
        factor: 1000.0,
        ..DEFINITION
    },
    DefinitionRow {
        key: "conductance",
        name: "Electrical conductance",
        symbol: "M⁻¹·L⁻²·T³·I²",
        terms: &[("mass", -1), ("length", -2), ("time", 3), ("current", 2)],
        factor: 0.001,
        ..DEFINITION
    },
];

static UNITS: &[UnitRow] = &[
    // Length (base: meter)
    UnitRow {
        key: "meter",
        definition: "length",
        name: "meter",
        symbol: "m",
        base: true,
        extra_prefixes: &["centi", "deci"],
        aliases: &["metre", "meters", "metres"],
        ..UNIT
    },
    UnitRow {
        key: "inch",
        definition: "length",
        name: "inch",
        symbol: "in",
        multiplier: 0.0254,
        kind: UnitKind::Customary,
        system: "customary",
        aliases: &["inches"],
        ..UNIT
    },
    UnitRow {
        key: "foot",
        definition: "length",
        name: "foot",
        symbol: "ft",
        multiplier: 0.3048,
        kind: UnitKind::Customary,
        system: "customary",
        aliases: &["feet", "ft"],
        ..UNIT
    },
    UnitRow {
        key: "yard",
        definition: "length",
        name: "yard",
        symbol: "yd",
        multiplier: 0.9144,
        kind: UnitKind::Customary,
        system: "customary",
        aliases: &["yards"],
        ..UNIT
    },
    UnitRow {
        key: "mile",
        definition: "length",
        name: "mile",
        symbol: "mi",
        multiplier: 1609.344,
        kind: UnitKind::Customary,
        system: "customary",
        aliases: &["miles"],
        ..UNIT
    },
    UnitRow {
        key: "nauticalMile",
        definition: "length",
        name: "nautical mile",
        symbol: "nmi",
        multiplier: 1852.0,
        kind: UnitKind::Whole,
        rare: true,
        ..UNIT
    },
    UnitRow {
        key: "astronomicalUnit",
        definition: "length",
        name: "astronomical unit",
        symbol: "au",
        multiplier: 1.495978707e11,
        kind: UnitKind::Whole,
        rare: true,
        ..UNIT
    },
    // Mass (base: gram, displayed as kilogram)
    UnitRow {
        key: "gram",
        definition: "mass",
        name: "gram",
        symbol: "g",
        base: true,
        default_prefix: Some("kilo"),
        aliases: &["grams", "gramme"],
        ..UNIT
    },
    UnitRow {
        key: "tonne",
        definition: "mass",
        name: "tonne",
        symbol: "t",
        multiplier: 1e6,
        aliases: &["metric ton"],
        ..UNIT
    },
    UnitRow {
        key: "pound",
        definition: "mass",
        name: "pound",
        symbol: "lb",
        multiplier: 453.59237,
        kind: UnitKind::Customary,
        system: "customary",
        aliases: &["lbs", "pounds"],
        ..UNIT
    },
    UnitRow {
        key: "ounce",
        definition: "mass",
        name: "ounce",
        symbol: "oz",
        multiplier: 28.349523125,
        kind: UnitKind::Customary,
        system: "customary",
        aliases: &["ounces"],
        ..UNIT
    },
    UnitRow {
        key: "stone",
        definition: "mass",
        name: "stone",
        symbol: "st",
        multiplier: 6350.29318,
        kind: UnitKind::Customary,
        system: "imperial",
        rare: true,
        ..UNIT
    },
    // Time (base: second)
    UnitRow {
        key: "second",
        definition: "time",
        name: "second",
        symbol: "s",
        base: true,
        aliases: &["sec", "seconds"],
        ..UNIT
    },
    UnitRow {
        key: "minute",
        definition: "time",
        name: "minute",
        symbol: "min",
        multiplier: 60.0,
        kind: UnitKind::Whole,
        aliases: &["minutes"],
        ..UNIT
    },
    UnitRow {
        key: "hour",
        definition: "time",
        name: "hour",
        symbol: "h",
        multiplier: 3600.0,
        kind: UnitKind::Whole,
        aliases: &["hr", "hours"],
        ..UNIT
    },
    UnitRow {
        key: "day",
        definition: "time",
        name: "day",
        symbol: "d",
        multiplier: 86400.0,
        kind: UnitKind::Whole,
        aliases: &["days"],
        ..UNIT
    },
    UnitRow {
        key: "week",
        definition: "time",
        name: "week",
        symbol: "wk",
        multiplier: 604800.0,
        kind: UnitKind::Whole,
        aliases: &["weeks"],
        ..UNIT
    },
    UnitRow {
        key: "year",
        definition: "time",
        name: "year",
        symbol: "yr",
        multiplier: 31557600.0,
        kind: UnitKind::Whole,
        estimated: true,
        aliases: &["years", "julian year"],
        ..UNIT
    },
    // Current (base: ampere)
    UnitRow {
        key: "ampere",
        definition: "current",
        name: "ampere",
        symbol: "A",
        base: true,
        aliases: &["amp", "amps"],
        ..UNIT
    },
    // Temperature (base: kelvin)
    UnitRow {
        key: "kelvin",
        definition: "temperature",
        name: "kelvin",
        symbol: "K",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "celsius",
        definition: "temperature",
        name: "degree Celsius",
        symbol: "°C",
        offset: 273.15,
        kind: UnitKind::Whole,
        aliases: &["degC"],
        ..UNIT
    },
    UnitRow {
        key: "fahrenheit",
        definition: "temperature",
        name: "degree Fahrenheit",
        symbol: "°F",
        multiplier: 5.0 / 9.0,
        offset: 273.15 - 32.0 * 5.0 / 9.0,
        kind: UnitKind::Whole,
        system: "customary",
        aliases: &["degF"],
        ..UNIT
    },
    UnitRow {
        key: "rankine",
        definition: "temperature",
        name: "degree Rankine",
        symbol: "°R",
        multiplier: 5.0 / 9.0,
        kind: UnitKind::Whole,
        system: "customary",
        rare: true,
        ..UNIT
    },
    // Amount (base: mole)
    UnitRow {
        key: "mole",
        definition: "amount",
        name: "mole",
        symbol: "mol",
        base: true,
        ..UNIT
    },
    // Luminosity (base: candela)
    UnitRow {
        key: "candela",
        definition: "luminosity",
        name: "candela",
        symbol: "cd",
        base: true,
        ..UNIT
    },
    // Data (base: byte)
    UnitRow {
        key: "byte",
        definition: "data",
        name: "byte",
        symbol: "B",
        kind: UnitKind::Binary,
        base: true,
        aliases: &["bytes"],
        ..UNIT
    },
    UnitRow {
        key: "bit",
        definition: "data",
        name: "bit",
        symbol: "bit",
        multiplier: 0.125,
        kind: UnitKind::Binary,
        aliases: &["bits"],
        ..UNIT
    },
    // Ratio (base: unity)
    UnitRow {
        key: "unity",
        definition: "ratio",
        name: "unity",
        symbol: "",
        kind: UnitKind::Fractional,
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "percent",
        definition: "ratio",
        name: "percent",
        symbol: "%",
        multiplier: 0.01,
        kind: UnitKind::Fractional,
        ..UNIT
    },
    UnitRow {
        key: "permille",
        definition: "ratio",
        name: "per mille",
        symbol: "‰",
        multiplier: 0.001,
        kind: UnitKind::Fractional,
        ..UNIT
    },
    UnitRow {
        key: "partsPerMillion",
        definition: "ratio",
        name: "part per million",
        symbol: "ppm",
        multiplier: 1e-6,
        kind: UnitKind::Fractional,
        ..UNIT
    },
    // Area (base: square meter)
    UnitRow {
        key: "squareMeter",
        definition: "area",
        name: "square meter",
        symbol: "m²",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "hectare",
        definition: "area",
        name: "hectare",
        symbol: "ha",
        multiplier: 1e4,
        kind: UnitKind::Whole,
        ..UNIT
    },
    UnitRow {
        key: "squareFoot",
        definition: "area",
        name: "square foot",
        symbol: "ft²",
        multiplier: 0.09290304,
        kind: UnitKind::Customary,
        system: "customary",
        ..UNIT
    },
    UnitRow {
        key: "acre",
        definition: "area",
        name: "acre",
        symbol: "ac",
        multiplier: 4046.8564224,
        kind: UnitKind::Customary,
        system: "customary",
        ..UNIT
    },
    // Volume (base: cubic meter)
    UnitRow {
        key: "cubicMeter",
        definition: "volume",
        name: "cubic meter",
        symbol: "m³",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "liter",
        definition: "volume",
        name: "liter",
        symbol: "L",
        multiplier: 0.001,
        extra_prefixes: &["centi", "deci"],
        aliases: &["litre", "liters", "litres"],
        ..UNIT
    },
    UnitRow {
        key: "gallon",
        definition: "volume",
        name: "US gallon",
        symbol: "gal",
        multiplier: 0.003785411784,
        kind: UnitKind::Customary,
        system: "us",
        ..UNIT
    },
    UnitRow {
        key: "imperialGallon",
        definition: "volume",
        name: "imperial gallon",
        symbol: "imp gal",
        multiplier: 0.00454609,
        kind: UnitKind::Customary,
        system: "imperial",
        ..UNIT
    },
    // Speed (base: meter per second)
    UnitRow {
        key: "meterPerSecond",
        definition: "speed",
        name: "meter per second",
        symbol: "m/s",
        base: true,
        aliases: &["mps"],
        ..UNIT
    },
    UnitRow {
        key: "kilometerPerHour",
        definition: "speed",
        name: "kilometer per hour",
        symbol: "km/h",
        multiplier: 1.0 / 3.6,
        kind: UnitKind::Whole,
        aliases: &["kph"],
        ..UNIT
    },
    UnitRow {
        key: "milePerHour",
        definition: "speed",
        name: "mile per hour",
        symbol: "mph",
        multiplier: 0.44704,
        kind: UnitKind::Customary,
        system: "customary",
        ..UNIT
    },
    UnitRow {
        key: "knot",
        definition: "speed",
        name: "knot",
        symbol: "kn",
        multiplier: 1852.0 / 3600.0,
        kind: UnitKind::Whole,
        rare: true,
        ..UNIT
    },
    // Velocity (vector, base: meter per second)
    UnitRow {
        key: "velocityMeterPerSecond",
        definition: "velocity",
        name: "meter per second",
        symbol: "m/s",
        base: true,
        ..UNIT
    },
    // Acceleration
    UnitRow {
        key: "meterPerSecondSquared",
        definition: "acceleration",
        name: "meter per second squared",
        symbol: "m/s²",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "standardGravity",
        definition: "acceleration",
        name: "standard gravity",
        symbol: "g₀",
        multiplier: 9.80665,
        kind: UnitKind::Whole,
        rare: true,
        ..UNIT
    },
    // Frequency
    UnitRow {
        key: "hertz",
        definition: "frequency",
        name: "hertz",
        symbol: "Hz",
        base: true,
        plural: "hertz",
        ..UNIT
    },
    UnitRow {
        key: "revolutionsPerMinute",
        definition: "frequency",
        name: "revolution per minute",
        symbol: "rpm",
        multiplier: 1.0 / 60.0,
        kind: UnitKind::Whole,
        ..UNIT
    },
    // Force
    UnitRow {
        key: "newton",
        definition: "force",
        name: "newton",
        symbol: "N",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "poundForce",
        definition: "force",
        name: "pound-force",
        symbol: "lbf",
        multiplier: 4.4482216152605,
        kind: UnitKind::Customary,
        system: "customary",
        ..UNIT
    },
    UnitRow {
        key: "dyne",
        definition: "force",
        name: "dyne",
        symbol: "dyn",
        multiplier: 1e-5,
        rare: true,
        ..UNIT
    },
    // Energy
    UnitRow {
        key: "joule",
        definition: "energy",
        name: "joule",
        symbol: "J",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "calorie",
        definition: "energy",
        name: "calorie",
        symbol: "cal",
        multiplier: 4.184,
        ..UNIT
    },
    UnitRow {
        key: "electronvolt",
        definition: "energy",
        name: "electronvolt",
        symbol: "eV",
        multiplier: 1.602176634e-19,
        ..UNIT
    },
    UnitRow {
        key: "kilowattHour",
        definition: "energy",
        name: "kilowatt hour",
        symbol: "kWh",
        multiplier: 3.6e6,
        kind: UnitKind::Whole,
        ..UNIT
    },
    // Power
    UnitRow {
        key: "watt",
        definition: "power",
        name: "watt",
        symbol: "W",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "horsepower",
        definition: "power",
        name: "horsepower",
        symbol: "hp",
        multiplier: 745.69987158227,
        kind: UnitKind::Customary,
        system: "customary",
        plural: "horsepower",
        ..UNIT
    },
    // Pressure
    UnitRow {
        key: "pascal",
        definition: "pressure",
        name: "pascal",
        symbol: "Pa",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "bar",
        definition: "pressure",
        name: "bar",
        symbol: "bar",
        multiplier: 1e5,
        ..UNIT
    },
    UnitRow {
        key: "atmosphere",
        definition: "pressure",
        name: "standard atmosphere",
        symbol: "atm",
        multiplier: 101325.0,
        kind: UnitKind::Whole,
        ..UNIT
    },
    UnitRow {
        key: "poundPerSquareInch",
        definition: "pressure",
        name: "pound per square inch",
        symbol: "psi",
        multiplier: 6894.757293168,
        kind: UnitKind::Customary,
        system: "customary",
        ..UNIT
    },
    // Charge
    UnitRow {
        key: "coulomb",
        definition: "charge",
        name: "coulomb",
        symbol: "C",
        base: true,
        ..UNIT
    },
    // Voltage
    UnitRow {
        key: "volt",
        definition: "voltage",
        name: "volt",
        symbol: "V",
        base: true,
        ..UNIT
    },
    // Resistance
    UnitRow {
        key: "ohm",
        definition: "resistance",
        name: "ohm",
        symbol: "Ω",
        base: true,
        ..UNIT
    },
    UnitRow {
        key: "reciprocalSiemens",
        definition: "resistance",
        name: "reciprocal siemens",
        symbol: "S⁻¹",
        rare: true,
        ..UNIT
    },
    // Conductance
    UnitRow {
        key: "siemens",
        definition: "conductance",
        name: "siemens",
        symbol: "S",
        base: true,
        plural: "siemens",
        ..UNIT
    },
];

impl Catalog {
    /// Catalog of common SI, customary and imperial units
    pub fn standard() -> Result<Catalog> {
        let mut builder = CatalogBuilder::new();

        for row in SYSTEMS {
            let mut spec = SystemSpec::new(row.key, row.name);
            if row.historical {
                spec = spec.historical();
            }
            if let Some(parent) = row.parent {
                spec = spec.parent(parent);
            }
            builder.system(spec);
        }

        for row in PREFIXES {
            let base = match row.kind {
                PrefixKind::SiBinary => 2.0,
                PrefixKind::Si | PrefixKind::SiUnofficial => 10.0,
            };
            let mut spec = PrefixSpec::new(row.key, row.symbol, row.kind, base, row.power);
            if row.rare {
                spec = spec.rare();
            }
            builder.prefix(spec);
        }

        for row in DEFINITIONS {
            let mut spec = DefinitionSpec::new(row.key, row.name).symbol(row.symbol);
            if row.vector {
                spec = spec.vector();
            }
            if row.dimensionless {
                spec = spec.dimensionless();
            }
            builder.definition(spec);
            if !row.terms.is_empty() {
                builder.derive_scaled(row.key, row.terms, row.factor);
            }
        }

        for row in UNITS {
            builder.unit(unit_spec(row));
        }

        builder.build()
    }
}

fn unit_spec(row: &UnitRow) -> UnitSpec {
    let mut spec = UnitSpec::new(row.key, row.definition)
        .name(row.name)
        .symbol(row.symbol)
        .multiplier(row.multiplier)
        .offset(row.offset)
        .kind(row.kind)
        .system(row.system);
    if !row.plural.is_empty() {
        spec = spec.plural(row.plural);
    }
    if row.base {
        spec = spec.base();
    }
    if row.rare {
        spec = spec.rare();
    }
    if row.estimated {
        spec = spec.estimated();
    }
    if let Some(prefix) = row.default_prefix {
        spec = spec.default_prefix(prefix);
    }
    for prefix in row.extra_prefixes {
        spec = spec.allow_prefix(*prefix);
    }
    for alias in row.aliases {
        spec = spec.alias(*alias);
    }
    spec
}
