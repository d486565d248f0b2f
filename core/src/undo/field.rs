//! Typed accessors from an edit target to one of its parts.

use std::fmt;

use super::command::{CommandError, CommandResult};

/// A named, typed path from an edit target `T` to one of its parts `V`.
///
/// The path is a locator closure that borrows the part out of the target, or
/// returns `None` when the target no longer has it (the indexed item was
/// removed, an optional child is unset). Commands resolve their field every
/// time they run, so they never hold a reference into the target between
/// calls.
///
/// The same type serves value fields ([`SetAttribute`](super::SetAttribute))
/// and containers ([`AppendItem`](super::AppendItem),
/// [`AddItem`](super::AddItem)).
///
/// ```
/// use facerig_core::undo::Field;
///
/// struct Marker {
///     scale: f64,
/// }
///
/// let scale = Field::new("scale", |m: &mut Marker| Some(&mut m.scale));
/// let mut marker = Marker { scale: 1.0 };
/// scale.set(&mut marker, 2.5).unwrap();
/// assert_eq!(scale.get(&mut marker).unwrap(), 2.5);
/// ```
pub struct Field<T, V> {
    name: String,
    locate: Box<dyn Fn(&mut T) -> Option<&mut V> + Send>,
}

impl<T: 'static, V: 'static> Field<T, V> {
    /// Creates a field from its display name and a locator closure.
    pub fn new<F>(name: impl Into<String>, locate: F) -> Self
    where
        F: Fn(&mut T) -> Option<&mut V> + Send + 'static,
    {
        Self {
            name: name.into(),
            locate: Box::new(locate),
        }
    }

    /// The field identifier, used in descriptions and error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the part out of `target`.
    ///
    /// Fails with [`CommandError::InvalidOperation`] if the target no longer
    /// exposes it.
    pub fn locate<'a>(&self, target: &'a mut T) -> CommandResult<&'a mut V> {
        (self.locate)(target).ok_or_else(|| {
            CommandError::InvalidOperation(format!(
                "`{}` is not available on the target",
                self.name
            ))
        })
    }

    /// Returns a copy of the current value.
    pub fn get(&self, target: &mut T) -> CommandResult<V>
    where
        V: Clone,
    {
        self.locate(target).map(|value| value.clone())
    }

    /// Overwrites the current value.
    pub fn set(&self, target: &mut T, value: V) -> CommandResult {
        *self.locate(target)? = value;
        Ok(())
    }
}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}
