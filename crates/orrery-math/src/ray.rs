//! Picking rays and sphere intersection.

use glam::DVec3;

/// A world-space ray with normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Ray start point.
    pub origin: DVec3,
    /// Unit direction. Zero if the ray was built from a degenerate direction,
    /// in which case every intersection test misses.
    pub direction: DVec3,
}

impl Ray {
    /// Build a ray, normalizing the direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from `origin` toward `target`.
    pub fn pointing(origin: DVec3, target: DVec3) -> Self {
        Self::new(origin, target - origin)
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with a sphere,
    /// if any. Hits behind the origin are ignored; an origin inside the
    /// sphere hits the far shell.
    pub fn sphere_hit(&self, target: &SphereTarget) -> Option<f64> {
        if self.direction == DVec3::ZERO {
            return None;
        }
        let oc = self.origin - target.center;
        let half_b = oc.dot(self.direction);
        let c = oc.length_squared() - target.radius * target.radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -half_b - sqrt_d;
        if near > 1e-9 {
            return Some(near);
        }
        let far = -half_b + sqrt_d;
        if far > 1e-9 {
            return Some(far);
        }
        None
    }
}

/// A pickable bounding sphere.
#[derive(Clone, Copy, Debug)]
pub struct SphereTarget {
    /// Sphere center in world space.
    pub center: DVec3,
    /// Sphere radius in scene units.
    pub radius: f64,
}

/// Index and ray distance of the nearest intersected sphere, scanning the
/// whole slice. Ties go to the earlier entry.
pub fn nearest_sphere_hit(ray: &Ray, targets: &[SphereTarget]) -> Option<(usize, f64)> {
    let mut nearest: Option<(usize, f64)> = None;
    for (index, target) in targets.iter().enumerate() {
        if let Some(t) = ray.sphere_hit(target) {
            let closer = match nearest {
                Some((_, best)) => t < best,
                None => true,
            };
            if closer {
                nearest = Some((index, t));
            }
        }
    }
    nearest
}
