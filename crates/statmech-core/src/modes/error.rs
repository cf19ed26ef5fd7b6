use super::rot::Geometry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotModeError {
    #[error(
        "Monatomic structure retained nonzero rotational temperatures: {rot_temperatures:?} K"
    )]
    MonatomicWithRotation { rot_temperatures: Vec<f64> },

    #[error("No nonzero moments of inertia found for {geometry} structure")]
    NoRotationalAxes { geometry: Geometry },
}
