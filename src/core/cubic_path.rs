//! Stückweise kubischer Bézier-Pfad mit Ankern und absoluten Handles.

use super::error::{EditError, EditResult};
use super::vector::{mirror_through, Vector2};

/// Welches Handle eines Ankers gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Formt das Segment, das an diesem Anker endet
    In,
    /// Formt das Segment, das an diesem Anker beginnt
    Out,
}

impl HandleKind {
    /// Das jeweils andere Handle desselben Ankers.
    pub fn opposite(self) -> Self {
        match self {
            HandleKind::In => HandleKind::Out,
            HandleKind::Out => HandleKind::In,
        }
    }
}

/// Vom Benutzer gesetzter Punkt des Pfads mit optionalen Steuer-Handles.
///
/// Handles sind absolute Koordinaten, keine Offsets zum Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Position des Ankers
    pub pos: Vector2,
    /// Eingehendes Handle (Segment endet hier)
    pub handle_in: Option<Vector2>,
    /// Ausgehendes Handle (Segment beginnt hier)
    pub handle_out: Option<Vector2>,
}

impl Anchor {
    /// Erstellt einen Anker ohne Handles.
    pub fn new(pos: Vector2) -> Self {
        Self {
            pos,
            handle_in: None,
            handle_out: None,
        }
    }

    /// Gibt das angefragte Handle zurück.
    pub fn handle(&self, kind: HandleKind) -> Option<Vector2> {
        match kind {
            HandleKind::In => self.handle_in,
            HandleKind::Out => self.handle_out,
        }
    }

    fn handle_mut(&mut self, kind: HandleKind) -> &mut Option<Vector2> {
        match kind {
            HandleKind::In => &mut self.handle_in,
            HandleKind::Out => &mut self.handle_out,
        }
    }

    /// Verschiebt Position und beide eigenen Handles.
    fn translate(&mut self, delta: Vector2) {
        self.pos += delta;
        if let Some(h) = self.handle_in.as_mut() {
            *h += delta;
        }
        if let Some(h) = self.handle_out.as_mut() {
            *h += delta;
        }
    }
}

/// Kontrollpunkte eines kubischen Segments `[P0, P1, P2, P3]`.
pub type SegmentControls = [Vector2; 4];

/// Geordnete Anker-Folge, die eine stückweise kubische Bézier-Kurve bildet.
///
/// Anker sind immer absolut gespeichert; ein Ganz-Pfad-Drag verschiebt alle
/// Anker über [`CubicPath::translate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubicPath {
    anchors: Vec<Anchor>,
}

impl CubicPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Pfad durch wiederholtes `add_anchor`.
    pub fn from_points(points: &[Vector2]) -> Self {
        let mut path = Self::new();
        for &p in points {
            path.add_anchor(p);
        }
        path
    }

    /// Alle Anker in Reihenfolge.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Anker an `index`, falls vorhanden.
    pub fn anchor(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(index)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Hängt einen Anker an und glättet das neue Segment.
    ///
    /// Existiert ein Vorgänger, liegen dessen `out`-Handle und das `in`-Handle
    /// des neuen Ankers auf 1/3 bzw. 2/3 der Verbindungsstrecke.
    /// Gibt den Index des neuen Ankers zurück.
    pub fn add_anchor(&mut self, point: Vector2) -> usize {
        let mut anchor = Anchor::new(point);
        if let Some(prev) = self.anchors.last_mut() {
            prev.handle_out = Some(prev.pos.lerp(point, 1.0 / 3.0));
            anchor.handle_in = Some(prev.pos.lerp(point, 2.0 / 3.0));
        }
        self.anchors.push(anchor);
        self.anchors.len() - 1
    }

    /// Verschiebt einen Anker samt eigener Handles um `delta`.
    ///
    /// Die auf diesen Anker zeigenden Nachbar-Handles (`out` des Vorgängers,
    /// `in` des Nachfolgers) wandern mit, damit angrenzende Segmente anliegen.
    pub fn move_anchor(&mut self, index: usize, delta: Vector2) -> EditResult<()> {
        EditError::check_index(index, self.anchors.len())?;

        self.anchors[index].translate(delta);
        if index > 0 {
            if let Some(h) = self.anchors[index - 1].handle_out.as_mut() {
                *h += delta;
            }
        }
        if let Some(next) = self.anchors.get_mut(index + 1) {
            if let Some(h) = next.handle_in.as_mut() {
                *h += delta;
            }
        }
        Ok(())
    }

    /// Setzt ein Handle auf eine absolute Position und spiegelt das Gegen-Handle.
    ///
    /// Das Gegen-Handle wird nur gespiegelt (`2·pos − position`), wenn es bereits
    /// existiert; ein fehlendes Gegen-Handle wird nicht angelegt.
    pub fn move_handle(
        &mut self,
        index: usize,
        kind: HandleKind,
        position: Vector2,
    ) -> EditResult<()> {
        EditError::check_index(index, self.anchors.len())?;

        let anchor = &mut self.anchors[index];
        *anchor.handle_mut(kind) = Some(position);
        let center = anchor.pos;
        if let Some(other) = anchor.handle_mut(kind.opposite()).as_mut() {
            *other = mirror_through(position, center);
        }
        Ok(())
    }

    /// Erster Anker (in Reihenfolge) mit Abstand `< radius` zu `point`.
    pub fn hit_test_anchor(&self, point: Vector2, radius: f32) -> Option<usize> {
        self.anchors
            .iter()
            .position(|a| a.pos.distance(point) < radius)
    }

    /// Erstes Handle mit Abstand `< radius`; pro Anker wird `in` vor `out` geprüft.
    pub fn hit_test_handle(&self, point: Vector2, radius: f32) -> Option<(usize, HandleKind)> {
        self.anchors.iter().enumerate().find_map(|(i, a)| {
            [HandleKind::In, HandleKind::Out]
                .into_iter()
                .find(|&kind| {
                    a.handle(kind)
                        .is_some_and(|h| h.distance(point) < radius)
                })
                .map(|kind| (i, kind))
        })
    }

    /// Entfernt einen Anker; nachfolgende Indizes rücken um eins nach vorne.
    pub fn remove_anchor(&mut self, index: usize) -> EditResult<Anchor> {
        EditError::check_index(index, self.anchors.len())?;
        Ok(self.anchors.remove(index))
    }

    /// Verschiebt den gesamten Pfad (alle Anker und Handles) um `delta`.
    pub fn translate(&mut self, delta: Vector2) {
        for anchor in &mut self.anchors {
            anchor.translate(delta);
        }
    }

    /// Kontrollpunkte aller Segmente zwischen aufeinanderfolgenden Ankern.
    ///
    /// Fehlende Handles fallen auf die jeweilige Anker-Position zurück.
    pub fn segments(&self) -> impl Iterator<Item = SegmentControls> + '_ {
        self.anchors.windows(2).map(|w| {
            let p0 = w[0].pos;
            let p3 = w[1].pos;
            [
                p0,
                w[0].handle_out.unwrap_or(p0),
                w[1].handle_in.unwrap_or(p3),
                p3,
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector2, b: Vector2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn add_anchor_smooths_new_segment() {
        let mut path = CubicPath::new();
        path.add_anchor(Vector2::new(0.0, 0.0));
        assert_eq!(path.anchors()[0].handle_out, None);

        path.add_anchor(Vector2::new(90.0, 30.0));
        let a = path.anchors();
        assert!(close(a[0].handle_out.unwrap(), Vector2::new(30.0, 10.0)));
        assert!(close(a[1].handle_in.unwrap(), Vector2::new(60.0, 20.0)));
        assert_eq!(a[0].handle_in, None);
        assert_eq!(a[1].handle_out, None);
    }

    #[test]
    fn move_anchor_drags_neighbour_handles_along() {
        let mut path = CubicPath::from_points(&[
            Vector2::new(0.0, 0.0),
            Vector2::new(30.0, 0.0),
            Vector2::new(60.0, 0.0),
        ]);
        let before = path.clone();
        let d = Vector2::new(5.0, -7.0);
        path.move_anchor(1, d).unwrap();

        let a = path.anchors();
        let b = before.anchors();
        assert!(close(a[1].pos, b[1].pos + d));
        assert!(close(a[1].handle_in.unwrap(), b[1].handle_in.unwrap() + d));
        assert!(close(a[1].handle_out.unwrap(), b[1].handle_out.unwrap() + d));
        assert!(close(a[0].handle_out.unwrap(), b[0].handle_out.unwrap() + d));
        assert!(close(a[2].handle_in.unwrap(), b[2].handle_in.unwrap() + d));
        // Nicht betroffen
        assert_eq!(a[0].pos, b[0].pos);
        assert_eq!(a[2].pos, b[2].pos);
    }

    #[test]
    fn move_anchor_and_back_restores_path() {
        let original = CubicPath::from_points(&[
            Vector2::new(3.5, 1.25),
            Vector2::new(40.0, 80.0),
            Vector2::new(120.0, 10.0),
            Vector2::new(200.0, 90.0),
        ]);
        for i in 0..original.len() {
            let mut path = original.clone();
            let d = Vector2::new(13.7, -4.2);
            path.move_anchor(i, d).unwrap();
            path.move_anchor(i, -d).unwrap();
            for (a, b) in path.anchors().iter().zip(original.anchors()) {
                assert!(close(a.pos, b.pos));
                assert_eq!(a.handle_in.is_some(), b.handle_in.is_some());
                assert_eq!(a.handle_out.is_some(), b.handle_out.is_some());
                if let (Some(x), Some(y)) = (a.handle_in, b.handle_in) {
                    assert!(close(x, y));
                }
                if let (Some(x), Some(y)) = (a.handle_out, b.handle_out) {
                    assert!(close(x, y));
                }
            }
        }
    }

    #[test]
    fn move_anchor_out_of_range_leaves_path_untouched() {
        let mut path = CubicPath::from_points(&[Vector2::ZERO, Vector2::new(10.0, 0.0)]);
        let before = path.clone();
        assert_eq!(
            path.move_anchor(2, Vector2::ONE),
            Err(EditError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(path, before);
    }

    #[test]
    fn move_handle_mirrors_existing_opposite_handle() {
        let mut path = CubicPath::from_points(&[
            Vector2::new(0.0, 0.0),
            Vector2::new(50.0, 50.0),
            Vector2::new(100.0, 0.0),
        ]);
        let p = Vector2::new(70.0, 40.0);
        path.move_handle(1, HandleKind::Out, p).unwrap();

        let a = path.anchors()[1];
        assert_eq!(a.handle_out, Some(p));
        assert_eq!(a.handle_in, Some(2.0 * a.pos - p));
    }

    #[test]
    fn move_handle_does_not_create_missing_opposite() {
        let mut path = CubicPath::from_points(&[Vector2::new(0.0, 0.0), Vector2::new(50.0, 0.0)]);
        // Erster Anker hat nur ein out-Handle
        path.move_handle(0, HandleKind::Out, Vector2::new(10.0, 20.0))
            .unwrap();
        assert_eq!(path.anchors()[0].handle_in, None);

        // Letzter Anker hat nur ein in-Handle
        path.move_handle(1, HandleKind::In, Vector2::new(40.0, 20.0))
            .unwrap();
        assert_eq!(path.anchors()[1].handle_out, None);
    }

    #[test]
    fn hit_test_anchor_prefers_lowest_index() {
        let path = CubicPath::from_points(&[
            Vector2::new(100.0, 100.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 0.0),
        ]);
        assert_eq!(path.hit_test_anchor(Vector2::new(2.0, 0.0), 10.0), Some(1));
        assert_eq!(path.hit_test_anchor(Vector2::new(50.0, 50.0), 10.0), None);
        // Abstand exakt gleich Radius zählt nicht
        assert_eq!(path.hit_test_anchor(Vector2::new(110.0, 100.0), 10.0), None);
    }

    #[test]
    fn hit_test_handle_checks_in_before_out() {
        let mut path = CubicPath::from_points(&[
            Vector2::new(0.0, 0.0),
            Vector2::new(30.0, 0.0),
            Vector2::new(60.0, 0.0),
        ]);
        // in und out von Anker 1 auf denselben Punkt legen
        path.move_handle(1, HandleKind::In, Vector2::new(30.0, 10.0))
            .unwrap();
        path.move_handle(1, HandleKind::Out, Vector2::new(30.0, 10.0))
            .unwrap();
        assert_eq!(
            path.hit_test_handle(Vector2::new(30.0, 11.0), 8.0),
            Some((1, HandleKind::In))
        );
    }

    #[test]
    fn remove_anchor_shifts_following_indices() {
        let mut path = CubicPath::from_points(&[
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(20.0, 0.0),
        ]);
        let removed = path.remove_anchor(1).unwrap();
        assert_eq!(removed.pos, Vector2::new(10.0, 0.0));
        assert_eq!(path.len(), 2);
        assert_eq!(path.anchors()[1].pos, Vector2::new(20.0, 0.0));
        assert!(path.remove_anchor(5).is_err());
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn segments_fall_back_to_anchor_positions() {
        let mut path = CubicPath::from_points(&[Vector2::new(0.0, 0.0), Vector2::new(9.0, 0.0)]);
        path.translate(Vector2::new(1.0, 1.0));
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 1);
        assert!(close(segs[0][0], Vector2::new(1.0, 1.0)));
        assert!(close(segs[0][1], Vector2::new(4.0, 1.0)));
        assert!(close(segs[0][2], Vector2::new(7.0, 1.0)));
        assert!(close(segs[0][3], Vector2::new(10.0, 1.0)));

        let bare = CubicPath {
            anchors: vec![Anchor::new(Vector2::ZERO), Anchor::new(Vector2::X)],
        };
        let seg = bare.segments().next().unwrap();
        assert_eq!(seg[1], Vector2::ZERO);
        assert_eq!(seg[2], Vector2::X);
    }
}
