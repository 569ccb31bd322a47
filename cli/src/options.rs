//! The flex command-line surface and its typed view.

use std::path::PathBuf;

use command_parser_core::{Arity, Bindings, CommandSpec, OptionSpec, Value};

pub const DESCRIPTION: &str = "Generates programs that perform pattern-matching on text";

/// Declaration of every option flex accepts, grouped into help sections.
pub fn flex_spec() -> CommandSpec {
    use OptionSpec as O;

    CommandSpec::from_options(
        [
            O::message("Table Compression:"),
            O::flag("--align", "trade off larger tables for better memory alignment", Some("-Ca")),
            O::flag("--ecs", "construct equivalence classes", Some("-Ce")),
            O::flag("--no-compress", "do not compress tables", Some("-Cf")),
            O::flag("--meta-ecs", "construct meta-equivalence classes", Some("-Cm")),
            O::flag("--read", "use read() instead of stdio for scanner input", Some("-Cr")),
            O::flag("--full", "generate fast, large scanner", Some("-f")),
            O::flag("--fast", "use alternate table representation", Some("-F")),
            O::flag("--default", "default compression (same as --ecs --meta-ecs)", Some("-Cem")),
            O::message("Debugging:"),
            O::flag("--debug", "enable debug mode in scanner", Some("-d")),
            O::flag("--backup", "write backing-up information to lex.backup", Some("-b")),
            O::flag("--perf-report", "write performance report to stderr", Some("-p")),
            O::flag("--nodefault", "suppress default rule to ECHO unmatched text", Some("-s")),
            O::flag("--trace", "flex should run in trace mode", Some("-T")),
            O::flag("--nowarn", "do not generate warnings", Some("-w")),
            O::flag("--verbose", "write summary of scanner statistics to stdout", Some("-v")),
            O::flag("--hex", "use hexadecimal numbers instead of octal in debug outputs", Some("-x")),
            O::message("Files:"),
            O::optional("--outfile", "write to file NAME instead of lex.yy.cpp", Arity::One, Some("-o")),
            O::optional("--skel", "use skeleton from file NAME", Arity::One, Some("-S")),
            O::flag("--stdout", "write scanner on stdout instead of lex.yy.cpp", Some("-t")),
            O::optional("--yyclass", "name of C++ class", Arity::One, None),
            O::optional("--header-file", "create a C header file in addition to the scanner", Arity::One, None),
            O::optional("--tables-file", "write tables to file NAME", Arity::One, None),
            O::message("Scanner behavior:"),
            O::flag("--batch", "generate batch scanner (opposite of -I)", Some("-B")),
            O::flag("--case-insensitive", "ignore case in patterns", Some("-i")),
            O::flag("--interactive", "generate interactive scanner (opposite of -B)", Some("-I")),
            O::flag("--yylineno", "track line count in yylineno", None),
            O::message("Generated code:"),
            O::flag("--noline", "suppress #line directives in scanner", Some("-L")),
            O::optional("--prefix", "use NAME as prefix instead of \"yy\"", Arity::One, Some("-P")),
            O::flag("--stdinit", "initialize yyin/yyout to stdin/stdout", None),
            O::message("Miscellaneous:"),
            O::flag("--version", "report flex version", Some("-V")),
            O::positional("files", "input files", Arity::Unbounded),
        ],
        DESCRIPTION,
    )
}

/// Typed view of the bindings produced for [`flex_spec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexOptions {
    pub align: bool,
    pub ecs: bool,
    pub no_compress: bool,
    pub meta_ecs: bool,
    pub read: bool,
    pub full: bool,
    pub fast: bool,
    pub default_compression: bool,

    pub debug: bool,
    pub backup: bool,
    pub perf_report: bool,
    pub nodefault: bool,
    pub trace: bool,
    pub nowarn: bool,
    pub verbose: bool,
    pub hex: bool,

    pub outfile: Option<PathBuf>,
    pub skel: Option<PathBuf>,
    pub stdout: bool,
    pub yyclass: Option<String>,
    pub header_file: Option<PathBuf>,
    pub tables_file: Option<PathBuf>,

    pub batch: bool,
    pub case_insensitive: bool,
    pub interactive: bool,
    pub yylineno: bool,

    pub noline: bool,
    pub prefix: Option<String>,
    pub stdinit: bool,

    pub version: bool,
    pub files: Vec<PathBuf>,
}

impl FlexOptions {
    pub fn from_bindings(bindings: &Bindings) -> Self {
        let flag = |name: &str| bindings.contains(name);
        let single = |name: &str| {
            bindings
                .lookup(name)
                .and_then(Value::as_single)
                .map(str::to_string)
        };
        let path = |name: &str| single(name).map(PathBuf::from);

        Self {
            align: flag("align"),
            ecs: flag("ecs"),
            no_compress: flag("no-compress"),
            meta_ecs: flag("meta-ecs"),
            read: flag("read"),
            full: flag("full"),
            fast: flag("fast"),
            default_compression: flag("default"),
            debug: flag("debug"),
            backup: flag("backup"),
            perf_report: flag("perf-report"),
            nodefault: flag("nodefault"),
            trace: flag("trace"),
            nowarn: flag("nowarn"),
            verbose: flag("verbose"),
            hex: flag("hex"),
            outfile: path("outfile"),
            skel: path("skel"),
            stdout: flag("stdout"),
            yyclass: single("yyclass"),
            header_file: path("header-file"),
            tables_file: path("tables-file"),
            batch: flag("batch"),
            case_insensitive: flag("case-insensitive"),
            interactive: flag("interactive"),
            yylineno: flag("yylineno"),
            noline: flag("noline"),
            prefix: single("prefix"),
            stdinit: flag("stdinit"),
            version: flag("version"),
            files: bindings
                .lookup("files")
                .map(|files| files.values().map(PathBuf::from).collect())
                .unwrap_or_default(),
        }
    }
}
