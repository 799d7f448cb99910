//! Placeholder registry.
//!
//! Templates refer to placeholders by name inside bracket groups, e.g.
//! `{person}` or `{language|technology}`. Each [`Placeholder`] resolves to a
//! pool of candidate entries drawn from the dataset:
//!
//! | Name              | Pool                                                   |
//! |-------------------|--------------------------------------------------------|
//! | `language`        | `languages`                                            |
//! | `technology`      | `technologies`                                         |
//! | `tld`             | `tlds`                                                 |
//! | `thing`           | `languages` + `technologies` + extra                   |
//! | `anything`        | `languages` + `technologies` + `people` + `companies` + extra |
//! | `person`          | `people`                                               |
//! | `company`         | `companies`                                            |
//! | `group`           | `people` + `companies` + extra                         |
//! | `problem`         | `problems`                                             |
//! | `year`            | one random number in `[1500, 2022)`                    |
//! | `age`             | one random number in `[1, 50)`                         |
//! | `bigNumber`       | one random number in `[2, 100000)`                     |
//! | `percentage`      | one random number in `[1, 100)`                        |
//! | `oneWordAnything` | `anything` with the first space removed from each text |
//! | `oneWordThing`    | `thing` with the first space removed from each text    |
//!
//! The set is closed: a name is a valid placeholder iff
//! [`Placeholder::from_name`] returns `Some`.

mod registry;


pub use registry::{Placeholder, UnknownPlaceholder, combine};
