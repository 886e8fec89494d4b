use glam::{Mat4, Quat, Vec3};

/// Cube vertex: position, outward face normal, texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-instance model matrix, split into four columns for the vertex stage
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Placement of one cube in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeInstance {
    pub position: Vec3,
    pub axis: Vec3,
    pub angle: f32,
}

impl CubeInstance {
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = match self.axis.try_normalize() {
            Some(axis) => Quat::from_axis_angle(axis, self.angle),
            None => Quat::IDENTITY,
        };
        Mat4::from_rotation_translation(rotation, self.position)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.model_matrix().to_cols_array_2d(),
        }
    }
}

const CUBE_POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// Ten cubes scattered in front of the default camera, each tilted 20° more than the last
pub fn default_instances() -> Vec<CubeInstance> {
    CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| CubeInstance {
            position: Vec3::from_array(position),
            axis: Vec3::new(1.0, 0.3, 0.5),
            angle: (20.0 * i as f32).to_radians(),
        })
        .collect()
}

/// Unit cube centered on the origin as a 36-vertex triangle list, CCW from outside
pub fn cube_vertices() -> Vec<Vertex> {
    // (normal, u axis, v axis) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    faces
        .iter()
        .flat_map(|&(normal, u, v)| {
            corners.iter().map(move |&(s, t)| {
                let position = normal * 0.5 + u * (s - 0.5) + v * (t - 0.5);
                Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: [s, 1.0 - t],
                }
            })
        })
        .collect()
}
