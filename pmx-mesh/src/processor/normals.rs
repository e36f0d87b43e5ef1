use glam::Vec3;

/// Area-weighted smooth normals, one per position.
///
/// Face normals are summed unnormalized, so larger triangles pull harder.
/// A position that no triangle touches keeps the zero vector. Every other
/// non-zero sum comes out unit length, however small the triangles are.
///
/// Panics if an index is out of bounds for `positions`.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accum = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i1, i2, i3) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v1 = Vec3::from_array(positions[i1]);
        let v2 = Vec3::from_array(positions[i2]);
        let v3 = Vec3::from_array(positions[i3]);

        let n = (v2 - v1).cross(v3 - v1);
        accum[i1] += n;
        accum[i2] += n;
        accum[i3] += n;
    }

    accum
        .into_iter()
        .map(|n| unit_or_zero(n).to_array())
        .collect()
}

/// `normalize_or_zero` underflows for sums whose squared length is below
/// `f32::MIN_POSITIVE`; scaling by the largest component first avoids that.
fn unit_or_zero(n: Vec3) -> Vec3 {
    let scale = n.abs().max_element();
    if scale > 0.0 {
        (n / scale).normalize_or_zero()
    } else {
        Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_triangle_faces_up() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert_eq!(n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn untouched_vertex_stays_zero() {
        let positions = [[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [5.0, 5.0, 5.0]];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn larger_triangle_dominates_shared_vertex() {
        // Vertex 0 is shared by a small triangle in the XY plane and a large one in the XZ plane.
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 10.0],
            [10.0, 0.0, 0.0],
        ];
        let normals = compute_normals(&positions, &[0, 1, 2, 0, 3, 4]);
        let n = Vec3::from_array(normals[0]);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        assert!(n.y > 0.99, "{n:?}");
        assert!(n.z > 0.0);
    }

    #[test]
    fn degenerate_triangle_contributes_nothing() {
        let positions = [[0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        assert!(normals.iter().all(|n| *n == [0.0; 3]));
    }

    #[test]
    fn tiny_triangle_still_gets_unit_normal() {
        let positions = [[0.0, 0.0, 0.0], [1e-13, 0.0, 0.0], [0.0, 1e-13, 0.0]];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert_eq!(n, [0.0, 0.0, 1.0]);
        }
    }

    fn mesh() -> impl Strategy<Value = (Vec<[f32; 3]>, Vec<u32>)> {
        (3..24_usize).prop_flat_map(|n| {
            (
                prop::collection::vec(prop::array::uniform3(-10.0..10.0_f32), n),
                prop::collection::vec(0..n as u32, 0..30).prop_map(|mut v| {
                    v.truncate(v.len() / 3 * 3);
                    v
                }),
            )
        })
    }

    proptest! {
        #[test]
        fn proptest_normals_are_unit_or_zero((positions, indices) in mesh()) {
            let normals = compute_normals(&positions, &indices);
            prop_assert_eq!(normals.len(), positions.len());
            for (i, n) in normals.iter().enumerate() {
                let len = Vec3::from_array(*n).length();
                if indices.contains(&(i as u32)) {
                    prop_assert!(
                        len == 0.0 || (len - 1.0).abs() < 1e-5,
                        "normal {} has length {}",
                        i,
                        len
                    );
                } else {
                    prop_assert_eq!(*n, [0.0; 3]);
                }
            }
        }

        #[test]
        fn proptest_normals_are_pure((positions, indices) in mesh()) {
            let first = compute_normals(&positions, &indices);
            prop_assert_eq!(first, compute_normals(&positions, &indices));
        }

        #[test]
        fn proptest_scale_does_not_change_normal(scale in 1e-18..1.0_f32) {
            let positions = [[0.0, 0.0, 0.0], [scale, 0.0, 0.0], [0.0, scale, 0.0]];
            for n in compute_normals(&positions, &[0, 1, 2]) {
                prop_assert_eq!(n, [0.0, 0.0, 1.0]);
            }
        }
    }
}
