use super::*;
use crate::ast::Value;

impl BrikConfig {
    /// Get a typed value using dot notation to descend into blocks.
    ///
    /// # Examples
    /// ```no_run
    /// # use brik_cfg::BrikConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = BrikConfig::from_file("tetris.brik")?;
    /// let width: i64 = config.get("board.width")?;
    /// let title: String = config.get("title")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns `KeyNotFound` if the path has no entry, or `TypeError` if the
    /// value cannot be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, BrikError>
    where
        T: TryFrom<Value, Error = BrikError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value. Returns `None` if the path has no entry.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, BrikError>
    where
        T: TryFrom<Value, Error = BrikError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(BrikError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use brik_cfg::BrikConfig;
    /// # let config = BrikConfig::from_file("snake.brik").unwrap();
    /// let speed = config.get_or("snake.speed", 1.0f64);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = BrikError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Look up a raw [`Value`] by dot path, cloning it out of the table.
    pub fn get_value(&self, path: &str) -> Result<Value, BrikError> {
        let mut segments = path.split('.');

        let first = segments.next().unwrap_or_default();
        let mut current = self.symbols.get(first).ok_or(BrikError::KeyNotFound {
            path: path.to_string(),
        })?;

        for segment in segments {
            let block = current.as_block().ok_or_else(|| BrikError::TypeError {
                message: format!("'{}' is not a block, cannot descend into it", path),
                hint: Some(format!("Segment '{}' was applied to a scalar or list", segment)),
            })?;
            current = block.get(segment).ok_or(BrikError::KeyNotFound {
                path: path.to_string(),
            })?;
        }

        Ok(current.clone())
    }
}
