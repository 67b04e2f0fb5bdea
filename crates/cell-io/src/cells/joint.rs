//! Joint data and terminal control frames.

use cell_core::reader::{at_least, between};
use cell_core::{CellError, JointType, Result, TokenReader};

use super::transform::Transformation;

/// Motion limits of a cell acting as a joint.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// How the joint moves, if at all.
    pub joint_type: JointType,
    /// Speed in units (or degrees) per second.
    pub speed: f64,
    /// Lower displacement limit.
    pub minimum: f64,
    /// Upper displacement limit; never below `minimum`.
    pub maximum: f64,
    /// Displacement when the scene was saved, within the limits.
    pub current: f64,
    /// Placement of the moving part relative to the cell.
    pub dynamic_geometry: Transformation,
    /// Attachment point used when animating the joint.
    pub terminal_control_frame: Option<Transformation>,
}

impl Joint {
    /// Read a joint record:
    /// `type speed minimum maximum current tcf-present dynamic-geometry 0 [tcf-geometry]`.
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let joint_type = JointType::read(reader)?;
        let speed = reader.read_double_with("joint speed", at_least(0.0))?;
        let minimum = reader.read_double("joint minimum")?;
        let maximum = reader.read_double_with("joint maximum", at_least(minimum))?;
        let current = reader.read_double_with("joint current value", between(minimum, maximum))?;
        let tcf_present = reader.read_bool("terminal control frame flag")?;
        if joint_type == JointType::TcfOnly && !tcf_present {
            return Err(CellError::parsing(
                reader.line_number(),
                "terminal-control-frame-only joint has no terminal control frame",
            ));
        }
        let dynamic_geometry = Transformation::read(reader)?;
        reader.read_int_with("joint separator", |value| value == 0)?;
        let terminal_control_frame = if tcf_present {
            Some(Transformation::read(reader)?)
        } else {
            None
        };
        Ok(Self {
            joint_type,
            speed,
            minimum,
            maximum,
            current,
            dynamic_geometry,
            terminal_control_frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    const STILL: &str = "0 0 0 0 0 0 0 1 1 1";

    #[test]
    fn test_read_joint_without_tcf() {
        let text = format!("2 1.5 -10 10 0 0  {STILL}  0");
        let mut reader = TokenReader::from_text(&text);
        let joint = Joint::read(&mut reader).unwrap();
        assert_eq!(joint.joint_type, JointType::Translational);
        assert_eq!(joint.speed, 1.5);
        assert_eq!((joint.minimum, joint.maximum, joint.current), (-10.0, 10.0, 0.0));
        assert_eq!(joint.dynamic_geometry.ops().len(), 2);
        assert!(joint.terminal_control_frame.is_none());
    }

    #[test]
    fn test_read_joint_with_tcf() {
        let text = format!("0 0 0 0 0 1  {STILL}  0  0 0 5 0 0 0 0 1 1 1");
        let mut reader = TokenReader::from_text(&text);
        let joint = Joint::read(&mut reader).unwrap();
        let tcf = joint.terminal_control_frame.unwrap();
        assert_eq!(tcf.ops().len(), 2);
        assert_eq!(tcf.matrix().transform_point3(DVec3::ZERO), DVec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_fields_after_joint_stay_in_step() {
        let mut reader = TokenReader::from_text("1 10 -90 90 30 0  5 0 0 0 0 0 0 1 1 1  0  42");
        let joint = Joint::read(&mut reader).unwrap();
        let moved = joint.dynamic_geometry.matrix().transform_point3(DVec3::ZERO);
        assert_eq!(moved, DVec3::new(5.0, 0.0, 0.0));
        assert_eq!(reader.read_int("next").unwrap(), 42);
    }

    #[test]
    fn test_separator_must_be_zero() {
        let text = format!("1 1 0 90 45 0  {STILL}  3");
        let mut reader = TokenReader::from_text(&text);
        assert!(Joint::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_tcf_only_requires_frame() {
        let text = format!("0 0 0 0 0 0  {STILL}  0");
        let mut reader = TokenReader::from_text(&text);
        assert!(Joint::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_current_outside_limits() {
        let mut reader = TokenReader::from_text("1 1 0 90 120 0");
        assert!(Joint::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_maximum_below_minimum() {
        let mut reader = TokenReader::from_text("1 1 10 5 7 0");
        assert!(Joint::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_negative_speed() {
        let mut reader = TokenReader::from_text("1 -1 0 1 0 0");
        assert!(Joint::read(&mut reader).unwrap_err().is_parsing());
    }
}
