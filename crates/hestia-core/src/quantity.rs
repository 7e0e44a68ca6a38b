//! Load type and unit vocabulary for port declarations.
//!
//! Every port carries a `LoadType` (what kind of physical quantity flows
//! through it) and a `Unit` tag. Values themselves cross the engine as
//! plain scalars; these tags exist so wiring can reject connections that
//! mix quantities, and so recorded columns stay self-describing.

use core::fmt;

/// Physical quantity kind carried by a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadType {
    Electricity,
    Heating,
    Cooling,
    Temperature,
    Gas,
    WarmWater,
    /// Wildcard for ports that deliberately carry untyped scalars.
    Any,
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadType::Electricity => "Electricity",
            LoadType::Heating => "Heating",
            LoadType::Cooling => "Cooling",
            LoadType::Temperature => "Temperature",
            LoadType::Gas => "Gas",
            LoadType::WarmWater => "WarmWater",
            LoadType::Any => "Any",
        };
        f.write_str(name)
    }
}

/// Unit tag for the scalar values exchanged on a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Watt,
    WattHour,
    KilowattHour,
    Celsius,
    Kelvin,
    Percent,
    /// Dimensionless or deliberately untagged.
    Any,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Unit::Watt => "W",
            Unit::WattHour => "Wh",
            Unit::KilowattHour => "kWh",
            Unit::Celsius => "°C",
            Unit::Kelvin => "K",
            Unit::Percent => "%",
            Unit::Any => "-",
        };
        f.write_str(symbol)
    }
}
