use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static TRANSACTIONS: LessonPage = LessonPage {
    path: "/lessons/transactions",
    meta: PageMeta {
        title: "Transactions - PostgreSQL Learning",
        description: "Group statements into atomic units with BEGIN, COMMIT, ROLLBACK and SAVEPOINT, choose isolation levels, and use Prisma $transaction.",
    },
    heading: "Transactions",
    intro: "A transaction makes several statements succeed or fail together. Other sessions never see a half-finished transfer.",
    sections: &[
        Section {
            heading: "BEGIN, COMMIT, ROLLBACK",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Transfer money",
                        r#"BEGIN;

UPDATE accounts SET balance = balance - 100 WHERE id = 1;
UPDATE accounts SET balance = balance + 100 WHERE id = 2;

COMMIT;   -- or ROLLBACK; to undo both"#,
                    ),
                    CodeSample::client(
                        "Prisma: Interactive transaction",
                        r#"await prisma.$transaction(async (tx) => {
  const from = await tx.account.update({
    where: { id: 1 },
    data: { balance: { decrement: 100 } },
  })
  if (from.balance.lt(0)) {
    throw new Error(`Insufficient funds on account ${from.id}`) // rolls back
  }
  await tx.account.update({
    where: { id: 2 },
    data: { balance: { increment: 100 } },
  })
})"#,
                    ),
                ),
                Code(CodeSample::client(
                    "Prisma: Batch transaction",
                    r#"const [post, audit] = await prisma.$transaction([
  prisma.post.create({ data: { title: 'Draft', authorId: 1 } }),
  prisma.auditLog.create({ data: { action: 'POST_CREATED' } }),
])"#,
                )),
            ],
        },
        Section {
            heading: "Savepoints",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Partial rollback",
                    r#"BEGIN;
INSERT INTO orders (customer_id, total) VALUES (7, 120);
SAVEPOINT before_bonus;
INSERT INTO bonuses (customer_id, amount) VALUES (7, 10);
ROLLBACK TO SAVEPOINT before_bonus;   -- the order survives
COMMIT;"#,
                )),
            ],
        },
        Section {
            heading: "Isolation levels",
            blocks: &[
                Bullets(&[
                    "READ COMMITTED (default): each statement sees data committed before it started.",
                    "REPEATABLE READ: the whole transaction sees one snapshot.",
                    "SERIALIZABLE: transactions behave as if run one after another; conflicting ones fail with a serialization error and must be retried.",
                ]),
                Compare(
                    CodeSample::sql(
                        "SQL: Choosing a level",
                        r#"BEGIN ISOLATION LEVEL SERIALIZABLE;
SELECT sum(balance) FROM accounts WHERE owner_id = 3;
UPDATE accounts SET balance = balance - 50 WHERE id = 9;
COMMIT;"#,
                    ),
                    CodeSample::client(
                        "Prisma: isolationLevel option",
                        r#"import { Prisma } from '@prisma/client'

await prisma.$transaction(
  async (tx) => {
    // ...
  },
  { isolationLevel: Prisma.TransactionIsolationLevel.Serializable, timeout: 10_000 },
)"#,
                    ),
                ),
                Note("Keep transactions short. Locks taken inside one are held until COMMIT or ROLLBACK."),
            ],
        },
    ],
};
