use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// Ray against the oriented bounds of one mesh: transform the ray into
/// local space, then run the slab test against the local AABB.
pub fn ray_hits_obb(
    origin: Vec3,
    direction: Vec3,
    transform: &GlobalTransform,
    aabb: &Aabb,
) -> Option<f32> {
    let inv = transform.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(direction);
    let center = Vec3::from(aabb.center);
    let half = Vec3::from(aabb.half_extents);
    ray_aabb_hit_t(o_local, d_local, center - half, center + half)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        if ray_direction.x != 0.0 { 1.0 / ray_direction.x } else { f32::INFINITY },
        if ray_direction.y != 0.0 { 1.0 / ray_direction.y } else { f32::INFINITY },
        if ray_direction.z != 0.0 { 1.0 / ray_direction.z } else { f32::INFINITY },
    );

    let (mut tmin, mut tmax) = ((min.x - ray_origin.x) * inv.x, (max.x - ray_origin.x) * inv.x);
    if tmin > tmax { std::mem::swap(&mut tmin, &mut tmax); }

    let (mut tymin, mut tymax) = ((min.y - ray_origin.y) * inv.y, (max.y - ray_origin.y) * inv.y);
    if tymin > tymax { std::mem::swap(&mut tymin, &mut tymax); }

    if (tmin > tymax) || (tymin > tmax) { return None; }
    if tymin > tmin { tmin = tymin; }
    if tymax < tmax { tmax = tymax; }

    let (mut tzmin, mut tzmax) = ((min.z - ray_origin.z) * inv.z, (max.z - ray_origin.z) * inv.z);
    if tzmin > tzmax { std::mem::swap(&mut tzmin, &mut tzmax); }

    if (tmin > tzmax) || (tzmin > tmax) { return None; }
    if tzmin > tmin { tmin = tzmin; }
    if tzmax < tmax { tmax = tzmax; }

    if tmax < 0.0 { return None; }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_from_outside_returns_entry_distance() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn miss_returns_none() {
        let t = ray_aabb_hit_t(
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn box_behind_ray_is_ignored() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn ray_starting_inside_hits_the_exit_face() {
        let t = ray_aabb_hit_t(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn rotated_bounds_are_respected() {
        let aabb = Aabb::from_min_max(Vec3::new(-2.0, -0.1, -0.1), Vec3::new(2.0, 0.1, 0.1));
        // Long axis rotated from X onto Z.
        let transform = GlobalTransform::from(
            Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let hit = ray_hits_obb(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &transform,
            &aabb,
        );
        assert!(hit.is_some());

        let side = ray_hits_obb(
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &transform,
            &aabb,
        );
        assert!(side.is_none());
    }
}
