use glam::{Mat4, Vec3};

/// Per-frame uniform buffer data for the cube shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light_dir: [f32; 4], // xyz used, w is padding
}

impl Uniforms {
    pub fn new(view_proj: Mat4, light_dir: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: light_dir.normalize_or_zero().extend(0.0).to_array(),
        }
    }
}
