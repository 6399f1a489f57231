#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    use chrono::{DateTime, Local};

    use crate::{Binder, Schema};

    /// Nested record exercised both as a named field (prefixed flags) and
    /// as an embedded record (unprefixed flags).
    #[derive(Debug, Default)]
    pub struct SubArgs {
        pub flag: bool,
        pub label: String,
        pub count: i64,
        pub uints: Vec<u16>,
        pub f32s: Vec<f32>,
    }

    impl Schema for SubArgs {
        fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
            binder.field("bool", &mut self.flag);
            binder.field("string", &mut self.label);
            binder.field("int", &mut self.count);
            binder.field("uints", &mut self.uints);
            binder.field("f32s", &mut self.f32s);
        }
    }

    /// The kitchen-sink record: every supported width, lists, a nested
    /// record, deliberately unbound fields, and unsupported types.
    #[derive(Debug)]
    pub struct Args {
        pub i8: i8,
        pub i16: i16,
        pub i32: i32,
        pub i64: i64,
        pub uint: u64,
        pub u8: u8,
        pub u16: u16,
        pub u32: u32,
        pub u64: u64,
        pub f32: f32,
        pub f64: f64,
        pub string: String,
        pub strings: Vec<String>,
        pub ints: Vec<i64>,
        pub sub: SubArgs,
        /// Never bound: reachable only as an unknown flag.
        pub ignored: String,
        /// Never bound either.
        pub private: String,
        pub map: HashMap<String, String>,
        pub subs: Vec<SubArgs>,
        pub times: Vec<DateTime<Local>>,
        pub time: DateTime<Local>,
    }

    impl Default for Args {
        fn default() -> Self {
            Args {
                i8: 0,
                i16: 0,
                i32: 0,
                i64: 0,
                uint: 0,
                u8: 0,
                u16: 0,
                u32: 0,
                u64: 0,
                f32: 0.0,
                f64: 0.0,
                string: String::new(),
                strings: Vec::new(),
                ints: Vec::new(),
                sub: SubArgs::default(),
                ignored: String::new(),
                private: String::new(),
                map: HashMap::new(),
                subs: Vec::new(),
                times: Vec::new(),
                time: DateTime::from(std::time::UNIX_EPOCH),
            }
        }
    }

    impl Schema for Args {
        fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
            binder.field("i8", &mut self.i8);
            binder.field("i16", &mut self.i16);
            binder.field("i32", &mut self.i32);
            binder.field("i64", &mut self.i64);
            binder.field("uint", &mut self.uint);
            binder.field("u8", &mut self.u8);
            binder.field("u16", &mut self.u16);
            binder.field("u32", &mut self.u32);
            binder.field("u64", &mut self.u64);
            binder.field("f32", &mut self.f32);
            binder.field("f", &mut self.f64);
            binder.field("string", &mut self.string);
            binder.field("strings", &mut self.strings);
            binder.field("ints", &mut self.ints);
            binder.nested("sub", &mut self.sub);
            // `ignored` and `private` are deliberately left unbound.
            binder.unsupported::<HashMap<String, String>>("map");
            binder.unsupported_list::<Vec<SubArgs>>("subs");
            binder.field("times", &mut self.times);
            binder.field("time", &mut self.time);
        }
    }

    /// A record embedding [`SubArgs`] without a prefix.
    #[derive(Debug, Default)]
    pub struct EmbedArgs {
        pub sub: SubArgs,
        pub extra: String,
    }

    impl Schema for EmbedArgs {
        fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
            binder.embed(&mut self.sub);
            binder.field("extra", &mut self.extra);
        }
    }

    /// A record reaching [`SubArgs`] through an empty option.
    #[derive(Debug, Default)]
    pub struct OptArgs {
        pub extra: Option<SubArgs>,
    }

    impl Schema for OptArgs {
        fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
            binder.nested_opt("extra", &mut self.extra);
        }
    }
}
