use std::io::Write;

/// The source location of a contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    /// The file containing the check, as reported by `file!()`.
    pub file: &'static str,
    /// The line of the check, as reported by `line!()`.
    pub line: u32,
    /// The checked expression as written, as reported by `stringify!()`.
    pub expr: &'static str,
}

impl Site {
    pub const fn new(file: &'static str, line: u32, expr: &'static str) -> Self {
        Self { file, line, expr }
    }
}

/// A broken contract.
///
/// The `Display` text is the diagnostic written to stderr just before the
/// process aborts. A violation is never returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("PRE_CONDITION \"{}\" is false \n({}, Line {})", .0.expr, .0.file, .0.line)]
    PreCondition(Site),

    #[error("POST_CONDITION \"{}\" is false \n({}, line {})", .0.expr, .0.file, .0.line)]
    PostCondition(Site),

    #[error("object \"{}\" is invalid \n({}, Line {})", .0.expr, .0.file, .0.line)]
    Invalid(Site),

    #[error(
        "class invariant on object \"{}\" is false BEFORE operations\n({}, Line {})",
        .0.expr, .0.file, .0.line
    )]
    InvariantBefore(Site),

    #[error(
        "class invariant on object \"{}\" is false AFTER operations\n({}, Line {})",
        .0.expr, .0.file, .0.line
    )]
    InvariantAfter(Site),
}

impl Violation {
    pub fn site(&self) -> &Site {
        match self {
            Violation::PreCondition(site)
            | Violation::PostCondition(site)
            | Violation::Invalid(site)
            | Violation::InvariantBefore(site)
            | Violation::InvariantAfter(site) => site,
        }
    }

    /// A short machine-friendly name for the kind of check that failed.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::PreCondition(_) => "pre_condition",
            Violation::PostCondition(_) => "post_condition",
            Violation::Invalid(_) => "validity",
            Violation::InvariantBefore(_) => "invariant_before",
            Violation::InvariantAfter(_) => "invariant_after",
        }
    }

    /// Writes the diagnostic to stderr and aborts the process.
    #[cold]
    #[inline(never)]
    pub fn abort(self) -> ! {
        #[cfg(feature = "tracing")]
        {
            let site = self.site();
            tracing::error!(
                target: "covenant",
                kind = self.kind(),
                file = site.file,
                line = site.line,
                expr = site.expr,
                "contract violated",
            );
        }

        // A closed stderr must not turn the abort into a panic.
        let _ = writeln!(std::io::stderr().lock(), "{self}");
        std::process::abort()
    }
}
