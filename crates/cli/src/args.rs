use thiserror::Error;

/// A solver the binary can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Stationary,
    PrimalDual,
    Penalty,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Stationary, Method::PrimalDual, Method::Penalty];

    /// The name used in traces and window titles.
    pub fn label(self) -> &'static str {
        match self {
            Method::Stationary => "stationary",
            Method::PrimalDual => "primal-dual",
            Method::Penalty => "penalty",
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub methods: Vec<Method>,
    pub trace: bool,
    pub plot: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("more than one mode given")]
    ExtraMode,
}

pub const USAGE: &str = "Usage: lagrange [stationary|ascent|penalty|all] [--trace] [--no-plot]";

impl Args {
    /// Parses arguments, excluding the program name.
    ///
    /// With no mode, every method runs.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mode: Option<Vec<Method>> = None;
        let mut trace = false;
        let mut plot = true;

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--trace" => trace = true,
                "--no-plot" => plot = false,
                flag if flag.starts_with('-') => {
                    return Err(ArgsError::UnknownFlag(flag.to_owned()));
                }
                name => {
                    if mode.is_some() {
                        return Err(ArgsError::ExtraMode);
                    }
                    mode = Some(match name {
                        "stationary" | "fsolve" => vec![Method::Stationary],
                        "ascent" | "primal-dual" => vec![Method::PrimalDual],
                        "penalty" => vec![Method::Penalty],
                        "all" => Method::ALL.to_vec(),
                        other => return Err(ArgsError::UnknownMode(other.to_owned())),
                    });
                }
            }
        }

        Ok(Self {
            methods: mode.unwrap_or_else(|| Method::ALL.to_vec()),
            trace,
            plot,
        })
    }
}
