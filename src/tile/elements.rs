use crate::{
    coords::Elevation,
    tile::{PathElement, SurfaceElement, TileElement},
};
use easy_ext::ext;

#[ext(ElementsExt)]
pub impl [TileElement] {
    fn surfaces(&self) -> impl Iterator<Item = &SurfaceElement> {
        self.iter().filter_map(|element| match element {
            TileElement::Surface(surface) => Some(surface),
            _ => None,
        })
    }

    fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut SurfaceElement> {
        self.iter_mut().filter_map(|element| match element {
            TileElement::Surface(surface) => Some(surface),
            _ => None,
        })
    }

    fn footpaths(&self) -> impl Iterator<Item = &PathElement> {
        self.iter().filter_map(|element| match element {
            TileElement::Footpath(path) => Some(path),
            _ => None,
        })
    }

    fn footpaths_mut(&mut self) -> impl Iterator<Item = &mut PathElement> {
        self.iter_mut().filter_map(|element| match element {
            TileElement::Footpath(path) => Some(path),
            _ => None,
        })
    }

    /// True if any footpath, hidden or not, sits exactly at this elevation
    fn has_footpath_at(&self, elevation: Elevation) -> bool {
        self.footpaths().any(|path| path.base_height() == elevation)
    }

    /// First visible footpath at this elevation, in stacking order
    fn visible_footpath_at_mut(&mut self, elevation: Elevation) -> Option<&mut PathElement> {
        let mut candidates = self
            .footpaths_mut()
            .filter(|path| !path.hidden && path.base_height() == elevation);
        let first = candidates.next();
        if first.is_some() && candidates.next().is_some() {
            tracing::debug!("several visible footpaths at elevation {elevation}, using the first");
        }
        first
    }
}
