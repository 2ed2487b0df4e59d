/// A configurable value, bounded by a minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    /// Otherwise, the value is unchanged and the bounds are returned.
    pub fn set(&mut self, value: T) -> Result<(), (T, T)> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(self.min_max()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "bounded",
            min: 1,
            max: 3,
            value: 2,
        };

        assert!(option.set(3).is_ok());
        assert_eq!(option.value, 3);

        assert_eq!(option.set(4), Err((1, 3)));
        assert_eq!(option.value, 3);
    }
}
