//! Power planning
//!
//! Decides, before the relay arms itself, which sleep state the idle
//! loop may use and which subsystems get powered off outright. Plans
//! are validated as data so a bad combination is caught at bring-up
//! instead of surfacing as a dead emitter in the field.

use heapless::Vec;
use heliograph_hal::{Peripheral, PowerControl, SleepMode};

/// Most peripherals a plan can shed.
pub const MAX_SHED: usize = 8;

/// Reasons a power plan is unusable for relaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerPlanError {
    /// Waking from the chosen state waits on an oscillator restart,
    /// clipping the front of every relayed burst
    WakeTooSlow,
    /// The chosen sleep state stops peripheral clocks, freezing the
    /// carrier mid-burst
    CarrierClockStops,
    /// The shed list includes the carrier counter
    ShedsCarrierTimer,
    /// The shed list is full
    ShedListFull,
}

/// Bring-up power decisions: one sleep mode, a list of casualties.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerPlan {
    sleep_mode: SleepMode,
    shed: Vec<Peripheral, MAX_SHED>,
}

impl PowerPlan {
    /// Start an empty plan around a sleep mode.
    pub fn new(sleep_mode: SleepMode) -> Self {
        Self {
            sleep_mode,
            shed: Vec::new(),
        }
    }

    /// The plan the relay runs with: idle sleep, and everything not
    /// involved in edge detection or carrier generation powered off.
    pub fn relay_default() -> Self {
        let mut plan = Self::new(SleepMode::Idle);
        for peripheral in [
            Peripheral::Adc,
            Peripheral::SerialEngine,
            Peripheral::AuxTimer,
        ] {
            // Three entries always fit MAX_SHED
            plan.shed(peripheral).ok();
        }
        plan
    }

    /// Add a subsystem to the shed list. Re-shedding is a no-op.
    pub fn shed(&mut self, peripheral: Peripheral) -> Result<(), PowerPlanError> {
        if self.shed.contains(&peripheral) {
            return Ok(());
        }
        self.shed
            .push(peripheral)
            .map_err(|_| PowerPlanError::ShedListFull)
    }

    /// Check the plan against the conditions relaying needs: the
    /// carrier must keep counting while the core sleeps, and a wake
    /// must not wait on an oscillator.
    pub fn validate(&self) -> Result<(), PowerPlanError> {
        if self.sleep_mode.wake_needs_oscillator_restart() {
            return Err(PowerPlanError::WakeTooSlow);
        }
        if !self.sleep_mode.keeps_peripheral_clocks() {
            return Err(PowerPlanError::CarrierClockStops);
        }
        if self.shed.contains(&Peripheral::CarrierTimer) {
            return Err(PowerPlanError::ShedsCarrierTimer);
        }
        Ok(())
    }

    /// Validate the plan and push it into the hardware.
    ///
    /// Nothing is written when validation fails, so a rejected plan
    /// leaves the power state exactly as it was.
    pub fn apply<P: PowerControl>(&self, power: &mut P) -> Result<(), PowerPlanError> {
        self.validate()?;
        for peripheral in &self.shed {
            power.power_down(*peripheral);
        }
        power.set_sleep_mode(self.sleep_mode);
        Ok(())
    }

    /// The sleep mode this plan selects.
    pub fn sleep_mode(&self) -> SleepMode {
        self.sleep_mode
    }

    /// Subsystems this plan powers off.
    pub fn shed_list(&self) -> &[Peripheral] {
        &self.shed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPower {
        downed: std::vec::Vec<Peripheral>,
        sleep_mode: Option<SleepMode>,
    }

    impl PowerControl for MockPower {
        fn power_down(&mut self, peripheral: Peripheral) {
            self.downed.push(peripheral);
        }

        fn set_sleep_mode(&mut self, mode: SleepMode) {
            self.sleep_mode = Some(mode);
        }
    }

    #[test]
    fn test_relay_default_is_valid() {
        let plan = PowerPlan::relay_default();
        assert_eq!(plan.validate(), Ok(()));
        assert_eq!(plan.sleep_mode(), SleepMode::Idle);
        assert_eq!(
            plan.shed_list(),
            &[
                Peripheral::Adc,
                Peripheral::SerialEngine,
                Peripheral::AuxTimer
            ]
        );
    }

    #[test]
    fn test_deep_sleep_states_are_rejected() {
        assert_eq!(
            PowerPlan::new(SleepMode::Standby).validate(),
            Err(PowerPlanError::CarrierClockStops)
        );
        assert_eq!(
            PowerPlan::new(SleepMode::PowerDown).validate(),
            Err(PowerPlanError::WakeTooSlow)
        );
    }

    #[test]
    fn test_shedding_the_carrier_timer_is_rejected() {
        let mut plan = PowerPlan::relay_default();
        plan.shed(Peripheral::CarrierTimer).unwrap();
        assert_eq!(plan.validate(), Err(PowerPlanError::ShedsCarrierTimer));
    }

    #[test]
    fn test_shed_is_idempotent() {
        let mut plan = PowerPlan::new(SleepMode::Idle);
        plan.shed(Peripheral::Adc).unwrap();
        plan.shed(Peripheral::Adc).unwrap();
        assert_eq!(plan.shed_list(), &[Peripheral::Adc]);
    }

    #[test]
    fn test_apply_sheds_then_selects_sleep_mode() {
        let mut power = MockPower::default();
        PowerPlan::relay_default().apply(&mut power).unwrap();
        assert_eq!(
            power.downed,
            vec![
                Peripheral::Adc,
                Peripheral::SerialEngine,
                Peripheral::AuxTimer
            ]
        );
        assert_eq!(power.sleep_mode, Some(SleepMode::Idle));
    }

    #[test]
    fn test_rejected_plan_touches_no_hardware() {
        let mut power = MockPower::default();
        let result = PowerPlan::new(SleepMode::PowerDown).apply(&mut power);
        assert_eq!(result, Err(PowerPlanError::WakeTooSlow));
        assert!(power.downed.is_empty());
        assert_eq!(power.sleep_mode, None);
    }
}
