/// Sample numbers, one per operator block.
pub struct TestNumbers {}

#[allow(unused)]
impl TestNumbers {
    pub fn gp_13() -> &'static str {
        "01312345678"
    }

    pub fn banglalink_14() -> &'static str {
        "01412345678"
    }

    pub fn teletalk() -> &'static str {
        "01512345678"
    }

    pub fn airtel() -> &'static str {
        "01612345678"
    }

    pub fn gp() -> &'static str {
        "01712345678"
    }

    pub fn robi() -> &'static str {
        "01812345678"
    }

    pub fn banglalink() -> &'static str {
        "01912345678"
    }

    /// Used by the transform tests.
    pub fn airtel_transform() -> &'static str {
        "01615928286"
    }
}
