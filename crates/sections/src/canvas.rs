//! Textual role/label pairs the canvases expose to assistive
//! technology. The visuals are decorative or interactive imagery, so
//! each one carries an image role and a description of what it shows.

use crate::nav::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasDescription {
    pub role: &'static str,
    pub label: &'static str,
}

impl CanvasDescription {
    /// Description for a section's canvas, if it has one.
    pub fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Hero => Some(Self {
                role: "img",
                label: "Abstract 3D floating shapes animation",
            }),
            Section::Skills => Some(Self {
                role: "img",
                label: "Interactive 3D visualization of technical skills. \
                        Spheres representing skills orbit a center point.",
            }),
            Section::Drive => Some(Self {
                role: "img",
                label: "3D Car Simulation. A car driving through an abstract \
                        city. Controls: W to accelerate, A and D to steer, \
                        Space to brake.",
            }),
            _ => None,
        }
    }
}
