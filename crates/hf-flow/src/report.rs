//! Human readable flow summary.

use std::fmt;

use crate::kind::FlowKind;
use crate::named_flow::NamedFlow;
use hf_air::GasState;
use hf_core::units::constants::SECONDS_PER_HOUR;

impl<G: GasState> fmt::Display for NamedFlow<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow name:    {}", self.name())?;
        writeln!(f, "Locked flow:  {}", self.locked_kind())?;
        write_line(f, self, FlowKind::MoistMassFlow, FlowKind::MoistVolumeFlow)?;
        write_line(f, self, FlowKind::DryMassFlow, FlowKind::DryVolumeFlow)
    }
}

fn write_line<G: GasState>(
    f: &mut fmt::Formatter<'_>,
    flow: &NamedFlow<G>,
    mass: FlowKind,
    volume: FlowKind,
) -> fmt::Result {
    let m = flow.flow(mass);
    let v = flow.flow(volume);
    writeln!(
        f,
        "{} = {:.3} kg/s  {:<22} | {} = {:.3} m3/s  {:<22} | {} = {:.1} m3/h",
        mass.symbol(),
        m,
        mass.label(),
        volume.symbol(),
        v,
        volume.label(),
        volume.symbol(),
        v * SECONDS_PER_HOUR,
    )
}

#[cfg(test)]
mod tests {
    use crate::{FlowKind, NamedFlow, share};
    use hf_air::MoistAir;

    #[test]
    fn report_lists_name_lock_and_all_quantities() {
        let flow = NamedFlow::new(
            "supply air",
            1.0,
            FlowKind::MoistVolumeFlow,
            share(MoistAir::default()),
        )
        .unwrap();

        let report = flow.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("supply air"));
        assert!(lines[1].contains("moist air volume flow"));
        assert!(lines[2].starts_with("m_Ma = "));
        assert!(lines[2].contains("V_Ma = 1.000 m3/s"));
        assert!(lines[2].contains("V_Ma = 3600.0 m3/h"));
        assert!(lines[3].starts_with("m_Da = "));
        assert!(lines[3].contains("V_Da = "));
    }
}
