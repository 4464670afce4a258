use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shelf(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

fn seed_dune(data_dir: &TempDir) {
    shelf(data_dir)
        .args(["book", "add", "B1", "Dune", "Herbert", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added successfully!"));
    shelf(data_dir)
        .args(["member", "add", "M1", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Member added successfully!"));
}

#[test]
fn test_init_creates_files() {
    let temp = TempDir::new().unwrap();

    shelf(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("data").join("books.txt").exists());
    assert!(temp.path().join("data").join("members.txt").exists());
    assert!(temp.path().join("data").join("transactions.txt").exists());
}

#[test]
fn test_empty_listings() {
    let temp = TempDir::new().unwrap();

    shelf(&temp)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout("No books available.\n");
    shelf(&temp)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout("No members available.\n");
    shelf(&temp)
        .args(["book", "top"])
        .assert()
        .success()
        .stdout("No books in library.\n");
    shelf(&temp)
        .arg("history")
        .assert()
        .success()
        .stdout("No transactions recorded yet.\n");
}

#[test]
fn test_borrow_and_return_flow() {
    let temp = TempDir::new().unwrap();
    seed_dune(&temp);

    shelf(&temp)
        .args(["borrow", "M1", "dune"])
        .assert()
        .success()
        .stdout("Book borrowed successfully!\n");

    shelf(&temp)
        .args(["borrow", "M1", "Dune"])
        .assert()
        .success()
        .stdout("Cannot borrow: either unavailable or already borrowed by this member.\n");

    shelf(&temp)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout("Book ID: B1 | Title: Dune | Author: Herbert | Available: 1 | Borrowed: 1\n");

    shelf(&temp)
        .args(["return", "M1", "Dune"])
        .assert()
        .success()
        .stdout("Book returned successfully!\n");

    shelf(&temp)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction History:"))
        .stdout(predicate::str::contains(",BORROW,M1,B1,Dune"))
        .stdout(predicate::str::contains(",RETURN,M1,B1,Dune"));
}

#[test]
fn test_multi_word_title() {
    let temp = TempDir::new().unwrap();
    shelf(&temp)
        .args(["book", "add", "B7", "The Left Hand of Darkness", "Le Guin", "1"])
        .assert()
        .success();
    shelf(&temp).args(["member", "add", "M1", "Alice"]).assert().success();

    shelf(&temp)
        .args(["borrow", "M1", "the", "left", "hand", "of", "darkness"])
        .assert()
        .success()
        .stdout("Book borrowed successfully!\n");
}

#[test]
fn test_unknown_member_and_book() {
    let temp = TempDir::new().unwrap();
    seed_dune(&temp);

    shelf(&temp)
        .args(["borrow", "M9", "Dune"])
        .assert()
        .success()
        .stdout("Member not found.\n");
    shelf(&temp)
        .args(["return", "M1", "Emma"])
        .assert()
        .success()
        .stdout("Book not found.\n");
}

#[test]
fn test_add_book_rejects_bad_copies() {
    let temp = TempDir::new().unwrap();

    shelf(&temp)
        .args(["book", "add", "B1", "Dune", "Herbert", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available copies cannot be negative."));

    shelf(&temp)
        .args(["book", "add", "B1", "Dune", "Herbert", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number for available copies."));

    shelf(&temp)
        .args(["book", "add", "B1", "Dune, Part One", "Herbert", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot contain ','"));
}

#[test]
fn test_search_and_top() {
    let temp = TempDir::new().unwrap();
    seed_dune(&temp);
    shelf(&temp)
        .args(["book", "add", "B2", "Emma", "Austen", "1"])
        .assert()
        .success();
    shelf(&temp).args(["borrow", "M1", "Emma"]).assert().success();

    shelf(&temp)
        .args(["book", "search", "--author", "AUSTEN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Emma"))
        .stdout(predicate::str::contains("Dune").not());

    shelf(&temp)
        .args(["book", "search", "--author", "Tolkien"])
        .assert()
        .success()
        .stdout("No books found for the given author.\n");

    shelf(&temp)
        .args(["book", "top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Borrowed Book:"))
        .stdout(predicate::str::contains("Book ID: B2"));
}

#[test]
fn test_member_history() {
    let temp = TempDir::new().unwrap();
    seed_dune(&temp);
    shelf(&temp).args(["borrow", "M1", "Dune"]).assert().success();

    shelf(&temp)
        .args(["history", "--member", "M1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan history for member M1"))
        .stdout(predicate::str::contains("1 event(s), 1 loan(s) still open"));

    shelf(&temp)
        .args(["history", "--member", "M9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Member not found: M9"));
}
