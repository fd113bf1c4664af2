//! Test fixture generators
//!
//! Go source snippets and on-disk source trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A Go file declaring one struct with N `int` fields (`F0 .. Fn`)
pub fn fixture_struct_with_fields(package: &str, name: &str, n: usize) -> String {
    let fields: String = (0..n).map(|i| format!("\tF{i} int\n")).collect();
    format!("package {package}\n\ntype {name} struct {{\n{fields}}}\n")
}

/// A Go file with a struct and a value and pointer receiver method
pub fn fixture_struct_with_methods(package: &str, name: &str) -> String {
    format!(
        "package {package}\n\ntype {name} struct{{}}\n\nfunc (v {name}) Value() int {{ return 0 }}\n\nfunc (p *{name}) Pointer() {{}}\n"
    )
}

/// A source tree under a temporary directory
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `content` at `rel`, creating parent directories
    pub fn file(self, rel: &str, content: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture file");
        self
    }

    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.path(rel)).expect("create dir");
        self
    }

    /// Symlink `link` (relative to the root) to `target` (relative to the root)
    #[cfg(unix)]
    pub fn symlink(self, target: &str, link: &str) -> Self {
        std::os::unix::fs::symlink(self.path(target), self.path(link)).expect("create symlink");
        self
    }
}

/// A small multi-package service tree
///
/// ```text
/// root/            (package app: Config, Server, methods, imports, bindings)
/// root/internal/   (no source files)
/// root/internal/db (package db: Config, Store)
/// root/web         (package web: Handler interface)
/// ```
pub fn fixture_service_tree() -> SourceTree {
    SourceTree::new()
        .file(
            "app.go",
            r#"package app

import (
	"fmt"
	log "github.com/sirupsen/logrus"
)

// Config configures the server.
type Config struct {
	Addr    string `json:"addr" yaml:"addr"`
	Timeout int    `json:"timeout"`
}

// Version of the service.
const Version = "1.2.0"

const (
	// MaxConns caps open connections.
	MaxConns = 128
	MinConns = -1
)

var Mode = "release"
"#,
        )
        .file(
            "server.go",
            r#"package app

// Server serves requests.
type Server struct {
	*Config
	Handlers map[string]Handler
	Hooks    []func(name string) error
}

// Start runs the server.
func (s *Server) Start(addr string, port int) error { return nil }

func (s Server) Name() string { return "" }

// New builds a server.
func New(cfg *Config) *Server { return nil }
"#,
        )
        .dir("internal")
        .file(
            "internal/db/db.go",
            r#"package db

type Config struct {
	DSN string
}

type Store struct {
	cfg Config
}

func (s *Store) Close() error { return nil }
"#,
        )
        .file(
            "web/handler.go",
            r#"package web

// Handler handles one request.
type Handler interface {
	fmt.Stringer
	// Serve writes the response.
	Serve(path string) (int, error)
}
"#,
        )
}
