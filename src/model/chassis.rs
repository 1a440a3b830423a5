/// Unresolved alarms across the system and chassis alarm lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlarmCounter {
    /// Major alarms.
    pub red: u64,
    /// Minor alarms.
    pub yellow: u64,
}

/// Control-plane health of the primary routing engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteEngineStats {
    pub temperature: f64,
    pub cpu_temperature: f64,
    pub memory_utilization: f64,
    pub cpu_user: f64,
    pub cpu_background: f64,
    pub cpu_system: f64,
    pub cpu_interrupt: f64,
    pub cpu_idle: f64,
    pub load_average_one: f64,
    pub load_average_five: f64,
    pub load_average_fifteen: f64,
}

/// One temperature sensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentItem {
    pub name: String,
    pub temperature: f64,
}
