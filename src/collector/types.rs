use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Check category selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Common,
    Electrical,
    Engine,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Common => "Common",
            Category::Electrical => "Electrical",
            Category::Engine => "Engine",
        };
        f.write_str(name)
    }
}

/// Measurement unit as declared by the device profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "V")]
    Volt,
    #[serde(rename = "A")]
    Amp,
    #[serde(rename = "W")]
    Watt,
    #[serde(rename = "kW")]
    KiloWatt,
    #[serde(rename = "Hz")]
    Hertz,
    #[serde(rename = "°C", alias = "C")]
    DegreesC,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "l/h")]
    LitersPerHour,
    #[serde(rename = "count")]
    Count,
    #[serde(rename = "none")]
    Unitless,
}

impl Unit {
    /// Suffix used in the human readable message
    pub fn label(self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Amp => "A",
            Unit::Watt => "W",
            Unit::KiloWatt => "kW",
            Unit::Hertz => "Hz",
            Unit::DegreesC => "°C",
            Unit::Percent => "%",
            Unit::Hours => "h",
            Unit::Liters => "L",
            Unit::LitersPerHour => "l/h",
            Unit::Count | Unit::Unitless => "",
        }
    }

    /// Unit of measurement accepted in performance data. Only percent is
    /// passed through, everything else is reported unitless.
    pub fn perf_label(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorField {
    MainsVoltageL1,
    MainsVoltageL2,
    MainsVoltageL3,
    GenVoltageL1,
    GenVoltageL2,
    GenVoltageL3,
    GenCurrentL1,
    GenCurrentL2,
    GenCurrentL3,
    GenPower,
    GenFrequency,
    RunningHours,
    FuelLevel,
    FuelConsumption,
    BatteryVoltage,
    CoolantTemperature,
    NumberOfStarts,
}

impl SensorField {
    pub fn label(self) -> &'static str {
        match self {
            SensorField::MainsVoltageL1 => "Mains Voltage L1",
            SensorField::MainsVoltageL2 => "Mains Voltage L2",
            SensorField::MainsVoltageL3 => "Mains Voltage L3",
            SensorField::GenVoltageL1 => "Gen Voltage L1",
            SensorField::GenVoltageL2 => "Gen Voltage L2",
            SensorField::GenVoltageL3 => "Gen Voltage L3",
            SensorField::GenCurrentL1 => "Gen Current L1",
            SensorField::GenCurrentL2 => "Gen Current L2",
            SensorField::GenCurrentL3 => "Gen Current L3",
            SensorField::GenPower => "Gen Power",
            SensorField::GenFrequency => "Gen Frequency",
            SensorField::RunningHours => "Running Hours",
            SensorField::FuelLevel => "Fuel Level",
            SensorField::FuelConsumption => "Fuel Consumption",
            SensorField::BatteryVoltage => "Battery Voltage",
            SensorField::CoolantTemperature => "Coolant Temperature",
            SensorField::NumberOfStarts => "Number of Starts",
        }
    }

    pub fn category(self) -> Category {
        match self {
            SensorField::MainsVoltageL1
            | SensorField::MainsVoltageL2
            | SensorField::MainsVoltageL3
            | SensorField::GenVoltageL1
            | SensorField::GenVoltageL2
            | SensorField::GenVoltageL3
            | SensorField::GenCurrentL1
            | SensorField::GenCurrentL2
            | SensorField::GenCurrentL3
            | SensorField::GenPower
            | SensorField::GenFrequency => Category::Electrical,
            SensorField::RunningHours
            | SensorField::FuelLevel
            | SensorField::FuelConsumption
            | SensorField::BatteryVoltage
            | SensorField::CoolantTemperature
            | SensorField::NumberOfStarts => Category::Engine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateField {
    Mode,
    Breaker,
    Engine,
}

impl StateField {
    pub fn label(self) -> &'static str {
        match self {
            StateField::Mode => "Mode",
            StateField::Breaker => "Breaker",
            StateField::Engine => "Engine",
        }
    }

    /// State value a healthy, standby generator reports
    pub fn healthy_value(self) -> &'static str {
        match self {
            StateField::Mode => "Auto",
            StateField::Breaker => "MainsOper",
            StateField::Engine => "Ready",
        }
    }
}

/// One numeric sensor value as returned by the device.
///
/// `value` is `None` when the device did not return the field.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub name: &'static str,
    pub unit: Unit,
    pub divisor: u32,
    pub value: Option<i64>,
}

impl SensorReading {
    pub fn present(field: SensorField, unit: Unit, divisor: u32, value: i64) -> Self {
        Self {
            name: field.label(),
            unit,
            divisor: divisor.max(1),
            value: Some(value),
        }
    }

    pub fn absent(field: SensorField, unit: Unit) -> Self {
        Self {
            name: field.label(),
            unit,
            divisor: 1,
            value: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Enumerated controller state, e.g. operating mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateReading {
    pub name: &'static str,
    pub value: Option<String>,
}

/// Everything the device returned for one category
#[derive(Debug, Clone, Default)]
pub struct ReadingSet {
    sensors: HashMap<SensorField, SensorReading>,
    states: HashMap<StateField, StateReading>,
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_sensor(mut self, field: SensorField, unit: Unit, divisor: u32, value: i64) -> Self {
        self.insert_sensor(field, SensorReading::present(field, unit, divisor, value));
        self
    }

    #[cfg(test)]
    pub fn with_state(mut self, field: StateField, value: &str) -> Self {
        self.insert_state(
            field,
            StateReading {
                name: field.label(),
                value: Some(value.to_string()),
            },
        );
        self
    }

    pub fn insert_sensor(&mut self, field: SensorField, reading: SensorReading) {
        self.sensors.insert(field, reading);
    }

    pub fn insert_state(&mut self, field: StateField, reading: StateReading) {
        self.states.insert(field, reading);
    }

    pub fn sensor(&self, field: SensorField) -> Option<&SensorReading> {
        self.sensors.get(&field)
    }

    pub fn state(&self, field: StateField) -> Option<&StateReading> {
        self.states.get(&field)
    }

    pub fn len(&self) -> usize {
        self.sensors.len() + self.states.len()
    }
}
