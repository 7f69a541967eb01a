use std::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::Ray;

impl Aabb {
    /// Computes the parameter interval `[tmin, tmax]` along which `ray` lies inside of `self`.
    ///
    /// The interval is restricted to `[0, max_toi]`. Returns `None` if the ray misses.
    pub fn clip_local_ray(&self, ray: &Ray, max_toi: Real) -> Option<(Real, Real)> {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = max_toi;

        for i in 0usize..DIM {
            if ray.dir[i] == 0.0 {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (self.mins[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (self.maxs[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at zero.
                    return None;
                }
            }
        }

        Some((tmin, tmax))
    }

    /// Tests whether `ray` hits `self` with a time of impact smaller than `max_toi`.
    #[inline]
    pub fn intersects_local_ray(&self, ray: &Ray, max_toi: Real) -> bool {
        self.clip_local_ray(ray, max_toi).is_some()
    }
}
