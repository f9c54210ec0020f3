//! Traversal behavior of `cd`/`ls`/`pwd` against a real directory tree.

use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;
use vsh_kernel::{Kernel, VirtualPath};

/// Directory tree used by every test:
///
/// ```text
/// /a/b/c/
/// /a/x/
/// /docs/my dir/
/// /docs/notes.txt
/// /empty/
/// ```
fn make_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for sub in ["a/b/c", "a/x", "docs/my dir", "empty"] {
        std::fs::create_dir_all(root.join(sub)).unwrap();
    }
    std::fs::write(root.join("docs/notes.txt"), b"notes").unwrap();
    dir
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn is_dir(root: &Path, path: &VirtualPath) -> bool {
    path.to_physical(root).is_dir()
}

#[tokio::test]
async fn quoted_directory_names() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    let result = kernel.execute(r#"ls "/docs""#).await;
    assert_eq!(result.out, "my dir/\nnotes.txt");

    assert!(kernel.execute(r#"cd "/docs/my dir""#).await.ok());
    assert_eq!(kernel.execute("pwd").await.out, "/docs/my dir");

    assert!(kernel.execute("cd '../my dir/..'").await.ok());
    assert_eq!(kernel.execute("pwd").await.out, "/docs");
}

#[tokio::test]
async fn unterminated_quote_is_reported() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    let result = kernel.execute(r#"cd "foo"#).await;
    assert!(!result.ok());
    assert!(!result.exit);
    assert_eq!(result.err, "parse error: unterminated double quote starting at column 4");
}

#[tokio::test]
async fn cd_without_args_always_resets() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    for start in ["/", "/a", "/a/b/c", "/docs/my dir"] {
        kernel.execute(&format!("cd '{start}'")).await;
        assert!(kernel.execute("cd").await.ok());
        assert_eq!(kernel.execute("pwd").await.out, "/");
    }
}

#[tokio::test]
async fn cd_round_trip_through_resolve() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    let physical = vsh_kernel::vfs::resolve(kernel.vfs_root(), &VirtualPath::root(), "/a/b");
    assert!(physical.is_dir());

    assert!(kernel.execute("cd /a/b").await.ok());
    assert_eq!(kernel.execute("pwd").await.out, "/a/b");
}

#[tokio::test]
async fn failed_cd_keeps_position() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();
    kernel.execute("cd /a").await;

    let result = kernel.execute("cd nonexistent").await;
    assert_eq!(result.err, "cd: nonexistent: No such file or directory");

    let result = kernel.execute("cd /docs/notes.txt").await;
    assert_eq!(result.err, "cd: /docs/notes.txt: Not a directory");

    assert_eq!(kernel.execute("pwd").await.out, "/a");
}

#[tokio::test]
async fn ls_empty_directory_prints_nothing() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    let result = kernel.execute("ls empty").await;
    assert!(result.ok());
    assert_eq!(result.out, "");
}

#[tokio::test]
async fn ls_missing_path() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    let result = kernel.execute("ls nowhere").await;
    assert!(!result.ok());
    assert_eq!(result.err, "ls: cannot access 'nowhere': No such file or directory");
}

#[tokio::test]
async fn parent_of_root_is_root() {
    let dir = make_tree();
    let kernel = Kernel::local(dir.path()).unwrap();

    assert!(kernel.execute("cd ..").await.ok());
    assert_eq!(kernel.execute("pwd").await.out, "/");
    assert_eq!(
        kernel.execute("ls ../..").await.out,
        kernel.execute("ls /").await.out
    );
}

fn cd_arg() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        Just("/".to_string()),
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("x".to_string()),
        Just("/a/b".to_string()),
        Just("../x".to_string()),
        Just("docs".to_string()),
        Just("missing".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After any sequence of `cd` calls, `pwd` is the lexical normalization
    /// of the successful steps composed in order.
    #[test]
    fn pwd_matches_composed_normalization(args in prop::collection::vec(cd_arg(), 0..10)) {
        let dir = make_tree();
        let root = dir.path().canonicalize().unwrap();
        let kernel = Kernel::local(&root).unwrap();
        let mut expected = VirtualPath::root();

        for arg in &args {
            let candidate = expected.join(arg);
            let result = block_on(kernel.execute(&format!("cd {arg}")));
            prop_assert_eq!(result.ok(), is_dir(&root, &candidate));
            if result.ok() {
                expected = candidate;
            }
        }

        let pwd = block_on(kernel.execute("pwd")).out;
        prop_assert_eq!(pwd, expected.to_string());
    }
}
