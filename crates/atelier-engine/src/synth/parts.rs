//! Primitive part geometry
//!
//! Builders compose two primitives: axis-aligned boxes and lathed frustums.
//! All geometry is emitted in part-local space with the part's base at y = 0;
//! placement happens through the part transform.

/// Vertices and triangles for one primitive
pub(crate) type PartGeometry = (Vec<[f32; 3]>, Vec<[u32; 3]>);

/// A box spanning [-w/2, w/2] x [0, h] x [-d/2, d/2]
pub(crate) fn box_part(w: f32, h: f32, d: f32) -> PartGeometry {
    let (hw, hd) = (w / 2.0, d / 2.0);
    let vertices = vec![
        [-hw, 0.0, -hd],
        [hw, 0.0, -hd],
        [hw, 0.0, hd],
        [-hw, 0.0, hd],
        [-hw, h, -hd],
        [hw, h, -hd],
        [hw, h, hd],
        [-hw, h, hd],
    ];
    let triangles = vec![
        // bottom
        [0, 2, 1],
        [0, 3, 2],
        // top
        [4, 5, 6],
        [4, 6, 7],
        // front (+z)
        [3, 2, 6],
        [3, 6, 7],
        // back (-z)
        [1, 0, 4],
        [1, 4, 5],
        // left (-x)
        [0, 3, 7],
        [0, 7, 4],
        // right (+x)
        [2, 1, 5],
        [2, 5, 6],
    ];
    (vertices, triangles)
}

/// A lathed frustum from radius `r_bottom` at y = 0 to `r_top` at y = h,
/// closed with caps. Equal radii give a cylinder; unequal radii a tapered leg.
pub(crate) fn frustum(r_bottom: f32, r_top: f32, h: f32, segments: u32) -> PartGeometry {
    let n = segments.max(3);
    let mut vertices = Vec::with_capacity(2 * n as usize + 2);
    let mut triangles = Vec::with_capacity(4 * n as usize);

    for ring in 0..2 {
        let (y, r) = if ring == 0 { (0.0, r_bottom) } else { (h, r_top) };
        for i in 0..n {
            let angle = (i as f32) * std::f32::consts::TAU / (n as f32);
            vertices.push([r * angle.cos(), y, r * angle.sin()]);
        }
    }
    let bottom_center = vertices.len() as u32;
    vertices.push([0.0, 0.0, 0.0]);
    let top_center = vertices.len() as u32;
    vertices.push([0.0, h, 0.0]);

    for i in 0..n {
        let a = i;
        let b = (i + 1) % n;
        let a_top = n + i;
        let b_top = n + b;
        // side quad
        triangles.push([a, b, b_top]);
        triangles.push([a, b_top, a_top]);
        // caps
        triangles.push([bottom_center, b, a]);
        triangles.push([top_center, a_top, b_top]);
    }

    (vertices, triangles)
}
