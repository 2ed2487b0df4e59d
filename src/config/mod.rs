/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each option is a [ConfigOption] recording the name and bounds of the option alongside its value.

The default configuration reproduces the reference behaviour of the CEGAR procedure, with no additional pruning of abstractions.

```rust
# use otter_qbf::config::Config;
let mut config = Config::default();
assert!(!config.local_clauses.value);

assert!(config.local_clauses.set(true).is_ok());
assert!(config.local_clauses.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Resolve clauses whose atoms are all bound by an existential block at that block, when building the abstraction of the block.
    pub local_clauses: ConfigOption<bool>,

    /// Record a model of the innermost block, when the formula is decided without recursion.
    pub witness: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            local_clauses: ConfigOption {
                name: "local_clauses",
                min: false,
                max: true,
                value: false,
            },

            witness: ConfigOption {
                name: "witness",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
