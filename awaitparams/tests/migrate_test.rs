//! Tests for the migrate command over real files.
#![allow(clippy::unwrap_used)]

use awaitparams::commands::{run_migrate, FileStatus, MigrateOptions};
use awaitparams::rules::all_rules;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn options() -> MigrateOptions<'static> {
    MigrateOptions {
        rules: all_rules(),
        ..MigrateOptions::default()
    }
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_single_id_signature_is_wrapped() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "route.ts", "{ params }: { params: { id: string } }");

    let reports = run_migrate(&[file.clone()], &options(), Vec::new()).unwrap();

    assert_eq!(reports[0].status, FileStatus::Fixed);
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "{ params }: { params: Promise<{ id: string }> }"
    );
}

#[test]
fn test_direct_read_is_awaited() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "route.ts", "const id = params.id");

    run_migrate(&[file.clone()], &options(), Vec::new()).unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "const { id } = await params"
    );
}

#[test]
fn test_parse_int_read_becomes_two_lines() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "route.ts", "const id = parseInt(params.id)");

    run_migrate(&[file.clone()], &options(), Vec::new()).unwrap();

    let content = fs::read_to_string(&file).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "const { id: paramId } = await params",
            "    const id = parseInt(paramId)"
        ]
    );
}

#[test]
fn test_already_migrated_file_is_not_written() {
    let dir = TempDir::new().unwrap();
    let migrated = "export async function GET(\n  req: Request,\n  { params }: { params: Promise<{ id: string, roleId: string }> }\n) {\n  const { id } = await params\n  const { roleId } = await params\n}\n";
    let file = write(&dir, "route.ts", migrated);
    let before = fs::metadata(&file).unwrap().modified().unwrap();

    let reports = run_migrate(&[file.clone()], &options(), Vec::new()).unwrap();

    assert_eq!(reports[0].status, FileStatus::NoChanges);
    assert_eq!(fs::read_to_string(&file).unwrap(), migrated);
    assert_eq!(fs::metadata(&file).unwrap().modified().unwrap(), before);
}

#[test]
fn test_missing_file_does_not_stop_the_run() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.ts");
    let after = write(&dir, "after.ts", "const roleId = params.roleId");

    let mut buffer = Vec::new();
    let reports = run_migrate(&[missing.clone(), after], &options(), &mut buffer).unwrap();

    assert_eq!(reports[0].status, FileStatus::NotFound);
    assert_eq!(reports[1].status, FileStatus::Fixed);
    assert!(!missing.exists());

    let output = String::from_utf8(buffer).unwrap();
    assert_eq!(output.matches("Not found:").count(), 1);
    assert!(output.contains("Fixed:"));
    assert!(output.ends_with("\nDone!\n"));
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let a = write(
        &dir,
        "a.ts",
        "export async function PATCH(req: Request, { params }: { params: { id: string } }) {\n    const id = parseInt(params.id)\n}\n",
    );
    let b = write(
        &dir,
        "b.ts",
        "export async function DELETE(req: Request, { params }: { params: { id: string, roleId: string } }) {\n    const id = params.id\n    const roleId = params.roleId\n}\n",
    );
    let targets = vec![a.clone(), b.clone()];

    let first = run_migrate(&targets, &options(), Vec::new()).unwrap();
    assert!(first.iter().all(|r| r.status == FileStatus::Fixed));
    let after_first = (fs::read_to_string(&a).unwrap(), fs::read_to_string(&b).unwrap());

    let second = run_migrate(&targets, &options(), Vec::new()).unwrap();
    assert!(second.iter().all(|r| r.status == FileStatus::NoChanges));
    assert_eq!(
        (fs::read_to_string(&a).unwrap(), fs::read_to_string(&b).unwrap()),
        after_first
    );
}

#[test]
fn test_unlisted_files_untouched() {
    let dir = TempDir::new().unwrap();
    let listed = write(&dir, "listed.ts", "const id = params.id\n");
    let unlisted = write(&dir, "unlisted.ts", "const id = params.id\n");

    run_migrate(&[listed], &options(), Vec::new()).unwrap();

    assert_eq!(
        fs::read_to_string(&unlisted).unwrap(),
        "const id = params.id\n"
    );
}

#[test]
fn test_unrelated_content_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let head = "import { prisma } from '@/lib/prisma'\r\n\r\n// résumé ✓\r\nexport async function GET(\r\n  req: Request,\r\n  ";
    let tail = "\r\n) {\r\n  return Response.json(await prisma.series.findMany())\r\n}\r\n";
    let file = write(
        &dir,
        "route.ts",
        &format!("{head}{{ params }}: {{ params: {{ id: string }} }}{tail}"),
    );

    run_migrate(&[file.clone()], &options(), Vec::new()).unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        format!("{head}{{ params }}: {{ params: Promise<{{ id: string }}> }}{tail}")
    );
}

#[test]
fn test_rule_hits_reported() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "route.ts",
        "{ params }: { params: { id: string } }\nconst id = params.id\nconst id = params.id\n",
    );

    let reports = run_migrate(&[file], &options(), Vec::new()).unwrap();

    let hits: Vec<_> = reports[0]
        .rules
        .iter()
        .map(|h| (h.id, h.matches))
        .collect();
    assert_eq!(hits, vec![("AWP-S001", 1), ("AWP-R002", 2)]);
}
