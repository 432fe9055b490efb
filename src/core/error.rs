//! Fehlertaxonomie für Pfad-, Marker- und Layer-Operationen.
//!
//! Alle Varianten sind lokal behandelbar: Use-Cases loggen sie als Warnung
//! und lassen den Zustand unverändert.

use super::layer::LayerId;

/// Ergebnis-Alias für Editier-Operationen im Core.
pub type EditResult<T> = Result<T, EditError>;

/// Fehler bei Editier-Operationen auf Pfaden, Markern und Layern.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Index {index} außerhalb des gültigen Bereichs (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Pfad hat Gesamtlänge 0")]
    DegenerateGeometry,

    #[error("Layer-Name \"{name}\" ist bereits vergeben")]
    DuplicateName { name: String },

    #[error("Marker verweist auf Anker {index} in Layer {layer}, der nicht mehr existiert")]
    DanglingMarkerReference { layer: LayerId, index: usize },

    #[error("Layer {id} existiert nicht")]
    UnknownLayer { id: LayerId },
}

impl EditError {
    /// Prüft `index < len` und liefert sonst `IndexOutOfRange`.
    pub fn check_index(index: usize, len: usize) -> EditResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}
