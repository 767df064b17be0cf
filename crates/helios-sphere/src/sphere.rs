//! Parametric UV-sphere mesh generation.
//!
//! [`SphereMesh`] generates positions, normals, texture coordinates, triangle
//! indices, and wireframe line indices for a sphere centered at the origin,
//! and interleaves them into a single 32-byte-stride vertex buffer ready for
//! upload. Geometry is rebuilt eagerly whenever a shape parameter changes.
//!
//! Invalid parameters are clamped silently rather than rejected: generation
//! must never fail for any reachable parameter combination.

use std::f32::consts::PI;
use std::fmt;

/// Minimum longitude subdivisions for a non-degenerate sphere.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Minimum latitude subdivisions for a non-degenerate sphere.
pub const MIN_STACK_COUNT: u32 = 2;

/// Interleaved vertex stride in floats: position(3) + normal(3) + uv(2).
pub const INTERLEAVED_FLOATS: usize = 8;
/// Interleaved vertex stride in bytes.
pub const INTERLEAVED_STRIDE: u32 = (INTERLEAVED_FLOATS * size_of::<f32>()) as u32;

/// Which world axis points "up" for a generated sphere.
///
/// Generation always happens Z-up (poles along ±Z); the other two variants
/// apply a fixed signed axis permutation afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpAxis {
    /// +X is up.
    X,
    /// +Y is up.
    Y,
    /// +Z is up (canonical generation orientation).
    #[default]
    Z,
}

impl UpAxis {
    /// Maps a raw 1/2/3 axis number to an `UpAxis`, defaulting to `Z` for
    /// anything outside that range.
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => UpAxis::X,
            2 => UpAxis::Y,
            _ => UpAxis::Z,
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpAxis::X => write!(f, "X"),
            UpAxis::Y => write!(f, "Y"),
            UpAxis::Z => write!(f, "Z"),
        }
    }
}

/// Opaque texture binding metadata carried alongside a mesh.
///
/// Pure pass-through state for the caller's rendering backend; it never
/// affects geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureBinding {
    /// Backend texture identifier (opaque to the mesh).
    pub texture_id: u32,
    /// Texture-unit / sampler-slot index.
    pub texture_unit: u32,
}

/// A smooth-shaded UV-sphere mesh with an interleaved vertex buffer.
///
/// The grid has `(stack_count + 1) × (sector_count + 1)` points, generated
/// row-major by stack then sector. Seam vertices at sector 0 and
/// `sector_count` share a position but carry distinct texture coordinates so
/// an equirectangular texture can wrap without a discontinuity.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    radius: f32,
    sector_count: u32,
    stack_count: u32,
    smooth: bool,
    up_axis: UpAxis,
    texture: TextureBinding,

    vertices: Vec<f32>,
    normals: Vec<f32>,
    tex_coords: Vec<f32>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
    interleaved: Vec<f32>,
}

impl SphereMesh {
    /// Builds a sphere from the full parameter set.
    ///
    /// Out-of-range parameters are clamped: `radius <= 0` falls back to 1.0,
    /// `sector_count` to at least [`MIN_SECTOR_COUNT`], `stack_count` to at
    /// least [`MIN_STACK_COUNT`].
    #[must_use]
    pub fn new(radius: f32, sector_count: u32, stack_count: u32, smooth: bool) -> Self {
        let mut mesh = Self {
            radius: 1.0,
            sector_count: MIN_SECTOR_COUNT,
            stack_count: MIN_STACK_COUNT,
            smooth,
            up_axis: UpAxis::Z,
            texture: TextureBinding::default(),
            vertices: Vec::new(),
            normals: Vec::new(),
            tex_coords: Vec::new(),
            indices: Vec::new(),
            line_indices: Vec::new(),
            interleaved: Vec::new(),
        };
        mesh.set(radius, sector_count, stack_count, smooth, UpAxis::Z);
        mesh
    }

    /// Builds a sphere with a non-default up axis.
    #[must_use]
    pub fn with_up_axis(
        radius: f32,
        sector_count: u32,
        stack_count: u32,
        smooth: bool,
        up_axis: UpAxis,
    ) -> Self {
        let mut mesh = Self::new(radius, sector_count, stack_count, smooth);
        mesh.set_up_axis(up_axis);
        mesh
    }

    /// Applies a full parameter set and regenerates all derived arrays.
    ///
    /// A non-positive radius keeps the previous radius instead of being
    /// corrected to some other value.
    pub fn set(
        &mut self,
        radius: f32,
        sector_count: u32,
        stack_count: u32,
        smooth: bool,
        up_axis: UpAxis,
    ) {
        if radius > 0.0 {
            self.radius = radius;
        }
        self.sector_count = sector_count.max(MIN_SECTOR_COUNT);
        self.stack_count = stack_count.max(MIN_STACK_COUNT);
        self.smooth = smooth;
        self.up_axis = up_axis;
        self.rebuild();
    }

    /// Sets the radius, regenerating geometry. Non-positive values are ignored.
    pub fn set_radius(&mut self, radius: f32) {
        if radius > 0.0 && radius != self.radius {
            self.radius = radius;
            self.rebuild();
        }
    }

    /// Sets the longitude subdivision count (clamped to [`MIN_SECTOR_COUNT`]).
    pub fn set_sector_count(&mut self, sector_count: u32) {
        let clamped = sector_count.max(MIN_SECTOR_COUNT);
        if clamped != self.sector_count {
            self.sector_count = clamped;
            self.rebuild();
        }
    }

    /// Sets the latitude subdivision count (clamped to [`MIN_STACK_COUNT`]).
    pub fn set_stack_count(&mut self, stack_count: u32) {
        let clamped = stack_count.max(MIN_STACK_COUNT);
        if clamped != self.stack_count {
            self.stack_count = clamped;
            self.rebuild();
        }
    }

    /// Sets the smooth-shading flag.
    ///
    /// Only smooth generation is implemented, so the geometry comes out the
    /// same either way; the flag is stored and a change still triggers the
    /// regeneration contract.
    pub fn set_smooth(&mut self, smooth: bool) {
        if smooth != self.smooth {
            self.smooth = smooth;
            self.rebuild();
        }
    }

    /// Changes the up axis by remapping existing arrays in place.
    ///
    /// Cheaper than regeneration: applies the signed axis permutation to
    /// positions and normals and rewrites the affected interleaved fields.
    pub fn set_up_axis(&mut self, up_axis: UpAxis) {
        if up_axis == self.up_axis {
            return;
        }
        let from = self.up_axis;
        self.up_axis = up_axis;
        self.change_up_axis(from, up_axis);
    }

    /// Sets the texture binding metadata. Field write only.
    pub fn set_texture(&mut self, texture: TextureBinding) {
        self.texture = texture;
    }

    /// Sets the backend texture identifier. Field write only.
    pub fn set_texture_id(&mut self, texture_id: u32) {
        self.texture.texture_id = texture_id;
    }

    /// Sets the texture-unit index. Field write only.
    pub fn set_texture_unit(&mut self, texture_unit: u32) {
        self.texture.texture_unit = texture_unit;
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Longitude subdivision count.
    #[must_use]
    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Latitude subdivision count.
    #[must_use]
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Smooth-shading flag.
    #[must_use]
    pub fn smooth(&self) -> bool {
        self.smooth
    }

    /// Current up axis.
    #[must_use]
    pub fn up_axis(&self) -> UpAxis {
        self.up_axis
    }

    /// Texture binding metadata, returned unchanged.
    #[must_use]
    pub fn texture(&self) -> TextureBinding {
        self.texture
    }

    /// Number of grid points: `(stack_count + 1) × (sector_count + 1)`.
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Number of solid triangles: `2 × sector_count × (stack_count − 1)`.
    #[must_use]
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Number of triangle indices.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of wireframe line indices.
    #[must_use]
    pub fn line_index_count(&self) -> u32 {
        self.line_indices.len() as u32
    }

    /// Flat position array, 3 floats per point.
    #[must_use]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Flat unit-normal array, index-aligned with [`vertices`](Self::vertices).
    #[must_use]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat texture-coordinate array, 2 floats per point, each in [0, 1].
    #[must_use]
    pub fn tex_coords(&self) -> &[f32] {
        &self.tex_coords
    }

    /// Triangle list indices (counter-clockwise winding).
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Line list indices for the wireframe grid (meridians + parallels).
    #[must_use]
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Interleaved vertex buffer: 8 floats per point, stride
    /// [`INTERLEAVED_STRIDE`] bytes.
    #[must_use]
    pub fn interleaved_vertices(&self) -> &[f32] {
        &self.interleaved
    }

    /// Interleaved stride in bytes.
    #[must_use]
    pub fn interleaved_stride(&self) -> u32 {
        INTERLEAVED_STRIDE
    }

    /// Byte length of the interleaved buffer, for GPU allocation.
    #[must_use]
    pub fn interleaved_byte_len(&self) -> u64 {
        (self.interleaved.len() * size_of::<f32>()) as u64
    }

    /// Byte length of the triangle index buffer.
    #[must_use]
    pub fn index_byte_len(&self) -> u64 {
        (self.indices.len() * size_of::<u32>()) as u64
    }

    /// Byte length of the wireframe index buffer.
    #[must_use]
    pub fn line_index_byte_len(&self) -> u64 {
        (self.line_indices.len() * size_of::<u32>()) as u64
    }

    // ── Generation ──────────────────────────────────────────────────

    /// Regenerates every derived array from the current parameters.
    fn rebuild(&mut self) {
        self.build_vertices();
        self.build_indices();
        self.build_interleaved();

        // Generation is Z-up; permute afterwards if another axis was chosen.
        if self.up_axis != UpAxis::Z {
            self.change_up_axis(UpAxis::Z, self.up_axis);
        }
    }

    /// Generates grid positions, normals, and texture coordinates.
    ///
    /// Parametric form with stack angle `u` in [−π/2, π/2] and sector angle
    /// `v` in [0, 2π]:
    ///
    /// ```text
    /// x = r·cos(u)·cos(v)
    /// y = r·cos(u)·sin(v)
    /// z = r·sin(u)
    /// ```
    fn build_vertices(&mut self) {
        let points = ((self.stack_count + 1) * (self.sector_count + 1)) as usize;
        self.vertices = Vec::with_capacity(points * 3);
        self.normals = Vec::with_capacity(points * 3);
        self.tex_coords = Vec::with_capacity(points * 2);

        let sector_step = 2.0 * PI / self.sector_count as f32;
        let stack_step = PI / self.stack_count as f32;
        let length_inv = 1.0 / self.radius;

        for i in 0..=self.stack_count {
            // +π/2 at the north pole down to −π/2 at the south pole.
            let stack_angle = PI / 2.0 - i as f32 * stack_step;
            let xy = self.radius * stack_angle.cos();
            let z = self.radius * stack_angle.sin();

            for j in 0..=self.sector_count {
                let sector_angle = j as f32 * sector_step;
                let x = xy * sector_angle.cos();
                let y = xy * sector_angle.sin();

                self.vertices.extend_from_slice(&[x, y, z]);
                self.normals
                    .extend_from_slice(&[x * length_inv, y * length_inv, z * length_inv]);
                self.tex_coords.extend_from_slice(&[
                    j as f32 / self.sector_count as f32,
                    i as f32 / self.stack_count as f32,
                ]);
            }
        }
    }

    /// Generates triangle and wireframe indices over the grid.
    ///
    /// Each non-pole cell contributes two CCW triangles; the rows touching a
    /// pole degenerate to one. Wireframe edges cover every meridian segment
    /// and every parallel except the redundant one at the north pole.
    fn build_indices(&mut self) {
        self.indices.clear();
        self.line_indices.clear();

        let row = self.sector_count + 1;
        for i in 0..self.stack_count {
            let mut k1 = i * row;
            let mut k2 = k1 + row;

            for _ in 0..self.sector_count {
                if i != 0 {
                    self.indices.extend_from_slice(&[k1, k2, k1 + 1]);
                }
                if i != self.stack_count - 1 {
                    self.indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
                }

                self.line_indices.extend_from_slice(&[k1, k2]);
                if i != 0 {
                    self.line_indices.extend_from_slice(&[k1, k1 + 1]);
                }

                k1 += 1;
                k2 += 1;
            }
        }
    }

    /// Walks positions, normals, and texture coordinates in lockstep and
    /// emits 8 floats per point, preserving point order.
    fn build_interleaved(&mut self) {
        let count = self.vertices.len() / 3;
        self.interleaved = Vec::with_capacity(count * INTERLEAVED_FLOATS);

        for p in 0..count {
            let v = p * 3;
            let t = p * 2;
            self.interleaved.extend_from_slice(&self.vertices[v..v + 3]);
            self.interleaved.extend_from_slice(&self.normals[v..v + 3]);
            self.interleaved
                .extend_from_slice(&self.tex_coords[t..t + 2]);
        }
    }

    /// Applies the signed axis permutation for `from → to` to positions and
    /// normals, and rewrites the matching interleaved fields.
    ///
    /// The six ordered axis pairs each map to a fixed swap/negate matrix; an
    /// approximate rotation would drift at the poles and seams, so the exact
    /// column table is kept.
    fn change_up_axis(&mut self, from: UpAxis, to: UpAxis) {
        let (tx, ty, tz): ([f32; 3], [f32; 3], [f32; 3]) = match (from, to) {
            (UpAxis::X, UpAxis::Y) => ([0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            (UpAxis::X, UpAxis::Z) => ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
            (UpAxis::Y, UpAxis::X) => ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            (UpAxis::Y, UpAxis::Z) => ([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]),
            (UpAxis::Z, UpAxis::X) => ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
            (UpAxis::Z, UpAxis::Y) => ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            _ => return, // from == to
        };

        let apply = |buf: &mut [f32], at: usize| {
            let (vx, vy, vz) = (buf[at], buf[at + 1], buf[at + 2]);
            buf[at] = tx[0] * vx + ty[0] * vy + tz[0] * vz;
            buf[at + 1] = tx[1] * vx + ty[1] * vy + tz[1] * vz;
            buf[at + 2] = tx[2] * vx + ty[2] * vy + tz[2] * vz;
        };

        let count = self.vertices.len() / 3;
        for p in 0..count {
            let v = p * 3;
            let iv = p * INTERLEAVED_FLOATS;
            apply(&mut self.vertices, v);
            apply(&mut self.normals, v);

            self.interleaved[iv..iv + 3].copy_from_slice(&self.vertices[v..v + 3]);
            self.interleaved[iv + 3..iv + 6].copy_from_slice(&self.normals[v..v + 3]);
        }
    }
}

impl fmt::Display for SphereMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Sphere =====")?;
        writeln!(f, "        Radius: {}", self.radius)?;
        writeln!(f, "  Sector Count: {}", self.sector_count)?;
        writeln!(f, "   Stack Count: {}", self.stack_count)?;
        writeln!(f, "Smooth Shading: {}", self.smooth)?;
        writeln!(f, "       Up Axis: {}", self.up_axis)?;
        writeln!(f, "Triangle Count: {}", self.triangle_count())?;
        writeln!(f, "   Index Count: {}", self.index_count())?;
        write!(f, "  Vertex Count: {}", self.vertex_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(v: &[f32]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_vertex_count_matches_grid() {
        let mesh = SphereMesh::new(2.0, 12, 6, true);
        assert_eq!(mesh.vertex_count(), (6 + 1) * (12 + 1));
        assert_eq!(mesh.vertices().len(), mesh.normals().len());
        assert_eq!(mesh.vertices().len(), 3 * mesh.vertex_count() as usize);
        assert_eq!(mesh.tex_coords().len(), 2 * mesh.vertex_count() as usize);
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = SphereMesh::new(5.0, 24, 12, true);
        for n in mesh.normals().chunks(3) {
            let len = magnitude(n);
            assert!((len - 1.0).abs() < 1e-5, "normal length {len} not unit");
        }
    }

    #[test]
    fn test_positions_lie_on_sphere() {
        let radius = 3.5;
        let mesh = SphereMesh::new(radius, 20, 10, true);
        for v in mesh.vertices().chunks(3) {
            let len = magnitude(v);
            assert!(
                (len - radius).abs() < 1e-4,
                "position magnitude {len}, expected {radius}"
            );
        }
    }

    #[test]
    fn test_indices_within_vertex_count() {
        let mesh = SphereMesh::new(1.0, 36, 18, true);
        let n = mesh.vertex_count();
        for &idx in mesh.indices() {
            assert!(idx < n, "triangle index {idx} out of bounds ({n} vertices)");
        }
        for &idx in mesh.line_indices() {
            assert!(idx < n, "line index {idx} out of bounds ({n} vertices)");
        }
    }

    #[test]
    fn test_triangle_count_formula() {
        for (sectors, stacks) in [(3u32, 2u32), (8, 4), (36, 18), (64, 32)] {
            let mesh = SphereMesh::new(1.0, sectors, stacks, true);
            assert_eq!(
                mesh.triangle_count(),
                2 * sectors * (stacks - 1),
                "sectors={sectors} stacks={stacks}"
            );
        }
    }

    #[test]
    fn test_interleaved_matches_source_arrays() {
        let mesh = SphereMesh::new(1.5, 10, 5, true);
        let inter = mesh.interleaved_vertices();
        assert_eq!(inter.len(), 8 * mesh.vertex_count() as usize);

        for p in 0..mesh.vertex_count() as usize {
            let iv = p * 8;
            assert_eq!(&inter[iv..iv + 3], &mesh.vertices()[p * 3..p * 3 + 3]);
            assert_eq!(&inter[iv + 3..iv + 6], &mesh.normals()[p * 3..p * 3 + 3]);
            assert_eq!(&inter[iv + 6..iv + 8], &mesh.tex_coords()[p * 2..p * 2 + 2]);
        }
    }

    #[test]
    fn test_reference_sphere_36_by_18() {
        let mesh = SphereMesh::new(1.0, 36, 18, true);
        assert_eq!(mesh.vertex_count(), 703);
        assert_eq!(mesh.triangle_count(), 2 * 36 * 17);
        assert_eq!(mesh.index_count(), 3 * 2 * 36 * 17);

        // First grid point is the north pole along +Z with texcoord (0, 0).
        let v = &mesh.vertices()[0..3];
        assert!(v[0].abs() < 1e-6 && v[1].abs() < 1e-6);
        assert!((v[2] - 1.0).abs() < 1e-6);
        assert_eq!(&mesh.tex_coords()[0..2], &[0.0, 0.0]);
    }

    #[test]
    fn test_seam_vertices_share_position_not_uv() {
        let mesh = SphereMesh::new(1.0, 8, 4, true);
        let row = (mesh.sector_count() + 1) as usize;
        // Equator row: first and last point of the row.
        let i = 2 * row;
        let j = 2 * row + row - 1;
        for c in 0..3 {
            assert!((mesh.vertices()[i * 3 + c] - mesh.vertices()[j * 3 + c]).abs() < 1e-5);
        }
        assert!((mesh.tex_coords()[i * 2] - 0.0).abs() < 1e-6);
        assert!((mesh.tex_coords()[j * 2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sector_and_stack_clamping() {
        let mesh = SphereMesh::new(1.0, 1, 0, true);
        assert_eq!(mesh.sector_count(), MIN_SECTOR_COUNT);
        assert_eq!(mesh.stack_count(), MIN_STACK_COUNT);
        assert_eq!(
            mesh.vertex_count(),
            (MIN_STACK_COUNT + 1) * (MIN_SECTOR_COUNT + 1)
        );
    }

    #[test]
    fn test_negative_radius_keeps_previous() {
        let mut mesh = SphereMesh::new(2.0, 12, 6, true);
        mesh.set_radius(-5.0);
        assert_eq!(mesh.radius(), 2.0);
        for v in mesh.vertices().chunks(3) {
            assert!((magnitude(v) - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_negative_radius_at_construction_defaults() {
        let mesh = SphereMesh::new(-1.0, 12, 6, true);
        assert_eq!(mesh.radius(), 1.0);
    }

    #[test]
    fn test_setters_regenerate_geometry() {
        let mut mesh = SphereMesh::new(1.0, 12, 6, true);
        let before = mesh.vertex_count();
        mesh.set_sector_count(24);
        assert_eq!(mesh.vertex_count(), (6 + 1) * (24 + 1));
        assert_ne!(mesh.vertex_count(), before);

        mesh.set_stack_count(12);
        assert_eq!(mesh.vertex_count(), (12 + 1) * (24 + 1));
        assert_eq!(
            mesh.interleaved_vertices().len(),
            8 * mesh.vertex_count() as usize
        );
    }

    #[test]
    fn test_up_axis_round_trip_restores_positions() {
        let mut mesh = SphereMesh::new(1.0, 16, 8, true);
        let original = mesh.vertices().to_vec();

        mesh.set_up_axis(UpAxis::X);
        mesh.set_up_axis(UpAxis::Z);

        for (a, b) in mesh.vertices().iter().zip(original.iter()) {
            assert!((a - b).abs() < 1e-6, "round trip drifted: {a} vs {b}");
        }
    }

    #[test]
    fn test_up_axis_y_moves_pole() {
        let mesh = SphereMesh::with_up_axis(1.0, 12, 6, true, UpAxis::Y);
        // The first grid point was the +Z pole; Z→Y puts it on +Y.
        let v = &mesh.vertices()[0..3];
        assert!(v[0].abs() < 1e-6 && v[2].abs() < 1e-6);
        assert!((v[1] - 1.0).abs() < 1e-6);
    }

    fn assert_pole_on_axis(mesh: &SphereMesh, axis: UpAxis) {
        let v = &mesh.vertices()[0..3];
        let expected = match axis {
            UpAxis::X => [1.0, 0.0, 0.0],
            UpAxis::Y => [0.0, 1.0, 0.0],
            UpAxis::Z => [0.0, 0.0, 1.0],
        };
        for c in 0..3 {
            assert!(
                (v[c] - expected[c]).abs() < 1e-6,
                "pole at {v:?}, expected up axis {axis}"
            );
        }
    }

    #[test]
    fn test_up_axis_all_six_remaps_move_pole() {
        let axes = [UpAxis::X, UpAxis::Y, UpAxis::Z];
        for from in axes {
            for to in axes {
                if from == to {
                    continue;
                }
                let mut mesh = SphereMesh::with_up_axis(1.0, 8, 4, true, from);
                assert_pole_on_axis(&mesh, from);

                mesh.set_up_axis(to);
                assert_pole_on_axis(&mesh, to);
                for n in mesh.normals().chunks(3) {
                    assert!((magnitude(n) - 1.0).abs() < 1e-5, "{from}->{to}");
                }
                for v in mesh.vertices().chunks(3) {
                    assert!((magnitude(v) - 1.0).abs() < 1e-5, "{from}->{to}");
                }
            }
        }
    }

    #[test]
    fn test_up_axis_inverse_pairs_round_trip() {
        let pairs = [
            (UpAxis::X, UpAxis::Y),
            (UpAxis::Y, UpAxis::Z),
            (UpAxis::Z, UpAxis::X),
        ];
        for (a, b) in pairs {
            let mut mesh = SphereMesh::with_up_axis(1.0, 12, 6, true, a);
            let original = mesh.vertices().to_vec();

            mesh.set_up_axis(b);
            mesh.set_up_axis(a);

            for (got, want) in mesh.vertices().iter().zip(original.iter()) {
                assert!((got - want).abs() < 1e-6, "{a}<->{b} drifted: {got} vs {want}");
            }
        }
    }

    #[test]
    fn test_up_axis_remap_keeps_interleaved_consistent() {
        let mut mesh = SphereMesh::new(1.0, 10, 5, true);
        mesh.set_up_axis(UpAxis::X);

        let inter = mesh.interleaved_vertices();
        for p in 0..mesh.vertex_count() as usize {
            let iv = p * 8;
            assert_eq!(&inter[iv..iv + 3], &mesh.vertices()[p * 3..p * 3 + 3]);
            assert_eq!(&inter[iv + 3..iv + 6], &mesh.normals()[p * 3..p * 3 + 3]);
        }
    }

    #[test]
    fn test_up_axis_remap_preserves_unit_normals() {
        let mut mesh = SphereMesh::new(4.0, 20, 10, true);
        mesh.set_up_axis(UpAxis::Y);
        for n in mesh.normals().chunks(3) {
            assert!((magnitude(n) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_texture_metadata_is_pass_through() {
        let mut mesh = SphereMesh::new(1.0, 12, 6, true);
        let geometry = mesh.vertices().to_vec();

        mesh.set_texture(TextureBinding {
            texture_id: 42,
            texture_unit: 3,
        });
        assert_eq!(mesh.texture().texture_id, 42);
        assert_eq!(mesh.texture().texture_unit, 3);
        assert_eq!(mesh.vertices(), &geometry[..]);

        mesh.set_texture_id(7);
        mesh.set_texture_unit(1);
        assert_eq!(mesh.texture().texture_id, 7);
        assert_eq!(mesh.texture().texture_unit, 1);
    }

    #[test]
    fn test_up_axis_from_raw_defaults_to_z() {
        assert_eq!(UpAxis::from_raw(1), UpAxis::X);
        assert_eq!(UpAxis::from_raw(2), UpAxis::Y);
        assert_eq!(UpAxis::from_raw(3), UpAxis::Z);
        assert_eq!(UpAxis::from_raw(0), UpAxis::Z);
        assert_eq!(UpAxis::from_raw(-7), UpAxis::Z);
        assert_eq!(UpAxis::from_raw(99), UpAxis::Z);
    }

    #[test]
    fn test_byte_lengths_for_buffer_allocation() {
        let mesh = SphereMesh::new(1.0, 36, 18, true);
        assert_eq!(mesh.interleaved_stride(), 32);
        assert_eq!(
            mesh.interleaved_byte_len(),
            8 * 4 * mesh.vertex_count() as u64
        );
        assert_eq!(mesh.index_byte_len(), 4 * mesh.index_count() as u64);
        assert_eq!(
            mesh.line_index_byte_len(),
            4 * mesh.line_index_count() as u64
        );
    }

    #[test]
    fn test_display_summary() {
        let mesh = SphereMesh::new(1.0, 36, 18, true);
        let text = format!("{mesh}");
        assert!(text.contains("Sector Count: 36"));
        assert!(text.contains("Triangle Count: 1224"));
        assert!(text.contains("Up Axis: Z"));
    }
}
