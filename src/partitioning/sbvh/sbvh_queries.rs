use crate::bounding_volume::BoundingSphere;
use crate::math::Real;
use crate::partitioning::Sbvh;
use crate::query::{Interaction, Ray};
use crate::shape::Primitive;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 64;

impl Sbvh {
    /// The total surface area of the primitives of this tree.
    ///
    /// Duplicated references are only counted once.
    pub fn surface_area<P: Primitive>(&self, prims: &[P]) -> Real {
        prims.iter().map(|prim| prim.surface_area()).sum()
    }

    /// The signed volume enclosed by the primitives of this tree (the area in 2D).
    pub fn signed_volume<P: Primitive>(&self, prims: &[P]) -> Real {
        prims.iter().map(|prim| prim.signed_volume()).sum()
    }

    /// Finds the point of `prims` closest to the center of `sphere`, within `sphere`.
    ///
    /// The radius of `sphere` is shrunk while the traversal proceeds. If a point is found,
    /// the squared radius of `sphere` is its squared distance to the center.
    pub fn find_closest_point<P: Primitive>(
        &self,
        prims: &[P],
        sphere: &mut BoundingSphere,
    ) -> Option<Interaction> {
        let root = self.nodes.first()?;
        let mut best: Option<(Interaction, Real)> = None;
        let mut stack: SmallVec<[(u32, Real); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        let (root_d2_min, _) = root.aabb.distance_bounds_to_local_point(&sphere.center);
        stack.push((0, root_d2_min));

        while let Some((id, d2_min)) = stack.pop() {
            if d2_min > sphere.radius2 {
                continue;
            }

            let node = &self.nodes[id as usize];

            if node.is_leaf() {
                for primitive in self.leaf_primitives(node) {
                    let Some((point, d2)) = prims[*primitive as usize].closest_point(sphere)
                    else {
                        continue;
                    };

                    if best.map(|(_, best_d2)| d2 < best_d2).unwrap_or(true) {
                        sphere.radius2 = d2;
                        best = Some((Interaction::new(point, d2.sqrt(), *primitive), d2));
                    }
                }
            } else {
                let left_id = id + 1;
                let right_id = id + node.right_offset;
                let mut children = [
                    (left_id, self.child_bounds(left_id, sphere)),
                    (right_id, self.child_bounds(right_id, sphere)),
                ];

                if children[1].1 < children[0].1 {
                    children.swap(0, 1);
                }

                // Push the farthest child first so the nearest one is visited first.
                for (child, d2_min) in children.into_iter().rev() {
                    if d2_min <= sphere.radius2 {
                        stack.push((child, d2_min));
                    }
                }
            }
        }

        best.map(|(interaction, _)| interaction)
    }

    /// The minimum squared distance between the sphere center and the node `id`.
    ///
    /// Shrinks `sphere` to the farthest squared distance to that node, which is reached by
    /// at least one point of its primitives.
    fn child_bounds(&self, id: u32, sphere: &mut BoundingSphere) -> Real {
        let (d2_min, d2_max) = self.nodes[id as usize]
            .aabb
            .distance_bounds_to_local_point(&sphere.center);
        let _ = sphere.shrink(d2_max);
        d2_min
    }

    /// Casts a ray on this tree and returns the closest hit with a time of impact smaller
    /// than `max_toi`.
    pub fn cast_ray<P: Primitive>(
        &self,
        prims: &[P],
        ray: &Ray,
        max_toi: Real,
    ) -> Option<Interaction> {
        let mut best_toi = max_toi;
        let mut best = None;

        self.visit_ray_leaves(ray, max_toi, |primitive| {
            if let Some((toi, normal)) = prims[primitive as usize].cast_ray(ray, best_toi) {
                if best.is_none() || toi < best_toi {
                    best_toi = toi;
                    best = Some(Interaction::with_normal(
                        ray.point_at(toi),
                        normal,
                        toi,
                        primitive,
                    ));
                }
            }
            Some(best_toi)
        });

        best
    }

    /// Tests whether `ray` hits any primitive with a time of impact smaller than `max_toi`.
    pub fn intersects_ray<P: Primitive>(&self, prims: &[P], ray: &Ray, max_toi: Real) -> bool {
        let mut hit = false;
        self.visit_ray_leaves(ray, max_toi, |primitive| {
            hit = prims[primitive as usize].cast_ray(ray, max_toi).is_some();
            (!hit).then_some(max_toi)
        });
        hit
    }

    /// All the hits of `ray` with a time of impact smaller than `max_toi`, sorted by
    /// increasing time of impact.
    ///
    /// Each primitive is reported at most once, even if it was duplicated by spatial splits.
    pub fn intersect_ray_all<P: Primitive>(
        &self,
        prims: &[P],
        ray: &Ray,
        max_toi: Real,
    ) -> Vec<Interaction> {
        let mut hits: Vec<Interaction> = Vec::new();

        self.visit_ray_leaves(ray, max_toi, |primitive| {
            if hits.iter().all(|hit| hit.primitive != primitive) {
                if let Some((toi, normal)) = prims[primitive as usize].cast_ray(ray, max_toi) {
                    hits.push(Interaction::with_normal(
                        ray.point_at(toi),
                        normal,
                        toi,
                        primitive,
                    ));
                }
            }
            Some(max_toi)
        });

        hits.sort_by_key(|hit| (OrderedFloat(hit.distance), hit.primitive));
        hits
    }

    /// Calls `visit` on every primitive of the leaves hit by `ray` before `max_toi`.
    ///
    /// `visit` returns the time of impact beyond which nodes can be skipped from now on, or
    /// `None` to stop the traversal.
    fn visit_ray_leaves(
        &self,
        ray: &Ray,
        max_toi: Real,
        mut visit: impl FnMut(u32) -> Option<Real>,
    ) {
        if self.nodes.is_empty() {
            return;
        }

        let mut max_toi = max_toi;
        let mut stack: SmallVec<[u32; TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push(0);

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];

            if !node.aabb.intersects_local_ray(ray, max_toi) {
                continue;
            }

            if node.is_leaf() {
                for primitive in self.leaf_primitives(node) {
                    match visit(*primitive) {
                        Some(toi) => max_toi = toi,
                        None => return,
                    }
                }
            } else {
                stack.push(id + node.right_offset);
                stack.push(id + 1);
            }
        }
    }
}
