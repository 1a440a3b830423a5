/// Traffic counters for one physical or logical interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceStats {
    pub name: String,
    pub description: String,
    /// Hardware address; logical units inherit their parent's.
    pub mac: String,
    pub receive_bytes: u64,
    pub transmit_bytes: u64,
    /// Status and error counters, present only on physical interfaces.
    pub physical: Option<PhysicalCounters>,
}

impl InterfaceStats {
    pub fn is_physical(&self) -> bool {
        self.physical.is_some()
    }
}

/// Status and error counters of a physical interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalCounters {
    pub admin_up: bool,
    pub oper_up: bool,
    /// True when admin and operational status disagree.
    pub error_status: bool,
    pub receive_errors: u64,
    pub receive_drops: u64,
    pub transmit_errors: u64,
    pub transmit_drops: u64,
}

impl PhysicalCounters {
    /// Creates counters with `error_status` derived from the two flags.
    pub fn with_status(admin_up: bool, oper_up: bool) -> Self {
        Self {
            admin_up,
            oper_up,
            error_status: admin_up != oper_up,
            ..Self::default()
        }
    }
}

/// Receive power as reported by the transceiver.
///
/// Modules that report a supply voltage expose an averaged signal power;
/// the others report the raw laser receive power.
#[derive(Debug, Clone, PartialEq)]
pub enum RxPower {
    SignalAverage {
        module_voltage: f64,
        power: f64,
        power_dbm: f64,
    },
    LaserRx {
        power: f64,
        power_dbm: f64,
    },
}

impl Default for RxPower {
    fn default() -> Self {
        Self::LaserRx {
            power: 0.0,
            power_dbm: 0.0,
        }
    }
}

/// Optical transceiver readings for one interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceDiagnostics {
    pub name: String,
    pub laser_bias_current: f64,
    pub laser_output_power: f64,
    pub laser_output_power_dbm: f64,
    pub module_temperature: f64,
    pub rx: RxPower,
}

impl InterfaceDiagnostics {
    /// Module voltage, or 0 when the module does not report one.
    pub fn module_voltage(&self) -> f64 {
        match self.rx {
            RxPower::SignalAverage { module_voltage, .. } => module_voltage,
            RxPower::LaserRx { .. } => 0.0,
        }
    }

    pub fn rx_signal_avg_optical_power(&self) -> f64 {
        match self.rx {
            RxPower::SignalAverage { power, .. } => power,
            RxPower::LaserRx { .. } => 0.0,
        }
    }

    pub fn rx_signal_avg_optical_power_dbm(&self) -> f64 {
        match self.rx {
            RxPower::SignalAverage { power_dbm, .. } => power_dbm,
            RxPower::LaserRx { .. } => 0.0,
        }
    }

    pub fn laser_rx_optical_power(&self) -> f64 {
        match self.rx {
            RxPower::LaserRx { power, .. } => power,
            RxPower::SignalAverage { .. } => 0.0,
        }
    }

    pub fn laser_rx_optical_power_dbm(&self) -> f64 {
        match self.rx {
            RxPower::LaserRx { power_dbm, .. } => power_dbm,
            RxPower::SignalAverage { .. } => 0.0,
        }
    }
}
