//! The three sample constructs.
//!
//! Each builder reproduces one function of the sample program statement for
//! statement. The parameter is called `in` in all three.

use cfo_ir::{
    BinaryOp, CaseLabel, Construct, ConstructBuilder, ExprArena, MalformedConstruct, StmtRange,
    StringInterner,
};

pub(crate) type Built = Result<(Construct, ExprArena), MalformedConstruct>;

pub const BRANCH_NAME: &str = "sample_switch";
pub const CONDITIONAL_NAME: &str = "sample_if";
pub const LOOP_NAME: &str = "sample_loop";

/// ```text
/// int sample_switch(int in) {
///     int ret = 0;
///     switch (in) {
///     case 1:  ret = 1; break;
///     case 2:  ret = 2; break;
///     case 10: ret--;
///     case 11: ret--;
///     case 12: ret += 12; break;
///     }
///     return ret;
/// }
/// ```
pub(crate) fn sample_switch(interner: &StringInterner) -> Built {
    let b = ConstructBuilder::new(interner);
    let set = |value: i32| b.expr_stmt(b.assign("ret", b.int(value)));
    let decrement = || b.expr_stmt(b.compound_assign("ret", BinaryOp::Sub, b.int(1)));

    let body = b.body([
        b.let_("ret", b.int(0)),
        b.switch(
            b.ident("in"),
            [
                (CaseLabel::Value(1), b.body([set(1), b.brk()])),
                (CaseLabel::Value(2), b.body([set(2), b.brk()])),
                (CaseLabel::Value(10), b.body([decrement()])),
                (CaseLabel::Value(11), b.body([decrement()])),
                (
                    CaseLabel::Value(12),
                    b.body([
                        b.expr_stmt(b.compound_assign("ret", BinaryOp::Add, b.int(12))),
                        b.brk(),
                    ]),
                ),
            ],
        ),
        b.ret(b.ident("ret")),
    ]);
    b.finish(BRANCH_NAME, "in", body)
}

/// ```text
/// int sample_if(int in) {
///     if (in > 10) {
///         if (in % 10 == 0 || in % 3 == 0) { return 11; }
///         return 10;
///     } else if (in > 5) {
///         int ret = 20 + (in % 10);
///         if (in > 7 && in % 2 == 0) { ret -= 5; } else { ret -= 5; ret += 7; }
///         return ret;
///     } else {
///     }
///     return 30;
/// }
/// ```
pub(crate) fn sample_if(interner: &StringInterner) -> Built {
    let b = ConstructBuilder::new(interner);
    let input = || b.ident("in");
    let rem_is_zero = |divisor: i32| {
        b.binary(
            b.binary(input(), BinaryOp::Mod, b.int(divisor)),
            BinaryOp::Eq,
            b.int(0),
        )
    };
    let adjust =
        |op: BinaryOp, amount: i32| b.expr_stmt(b.compound_assign("ret", op, b.int(amount)));

    let over_ten = b.body([
        b.if_chain(
            [(
                b.binary(rem_is_zero(10), BinaryOp::Or, rem_is_zero(3)),
                b.body([b.ret(b.int(11))]),
            )],
            None,
        ),
        b.ret(b.int(10)),
    ]);

    let over_five = b.body([
        b.let_(
            "ret",
            b.binary(b.int(20), BinaryOp::Add, b.binary(input(), BinaryOp::Mod, b.int(10))),
        ),
        b.if_chain(
            [(
                b.binary(
                    b.binary(input(), BinaryOp::Gt, b.int(7)),
                    BinaryOp::And,
                    rem_is_zero(2),
                ),
                b.body([adjust(BinaryOp::Sub, 5)]),
            )],
            Some(b.body([adjust(BinaryOp::Sub, 5), adjust(BinaryOp::Add, 7)])),
        ),
        b.ret(b.ident("ret")),
    ]);

    let body = b.body([
        b.if_chain(
            [
                (b.binary(input(), BinaryOp::Gt, b.int(10)), over_ten),
                (b.binary(input(), BinaryOp::Gt, b.int(5)), over_five),
            ],
            Some(StmtRange::EMPTY),
        ),
        b.ret(b.int(30)),
    ]);
    b.finish(CONDITIONAL_NAME, "in", body)
}

/// ```text
/// int sample_loop(int in) {
///     for (int i = 0; i < 10; i++) {
///         in += i;
///         in %= 10;
///         for (int j = 0; j < 10; j++) {
///             in += j * 10;
///             if (j == 5) { continue; }
///         }
///     }
///     int i = 10;
///     do { i--; in -= i; } while (in > 0 || i > 0);
///     while (i < 100) {
///         i++;
///         in %= i;
///         if (in == 0) { break; }
///     }
///     return in;
/// }
/// ```
pub(crate) fn sample_loop(interner: &StringInterner) -> Built {
    let b = ConstructBuilder::new(interner);
    let update =
        |target: &str, op: BinaryOp, value| b.expr_stmt(b.compound_assign(target, op, value));
    let increment = |target: &str| b.compound_assign(target, BinaryOp::Add, b.int(1));
    let counter = |name: &str| {
        (
            Some(b.let_(name, b.int(0))),
            Some(b.binary(b.ident(name), BinaryOp::Lt, b.int(10))),
            Some(increment(name)),
        )
    };

    let (j_init, j_cond, j_step) = counter("j");
    let inner = b.for_loop(
        j_init,
        j_cond,
        j_step,
        b.body([
            update(
                "in",
                BinaryOp::Add,
                b.binary(b.ident("j"), BinaryOp::Mul, b.int(10)),
            ),
            b.if_chain(
                [(
                    b.binary(b.ident("j"), BinaryOp::Eq, b.int(5)),
                    b.body([b.cont()]),
                )],
                None,
            ),
        ]),
    );

    let (i_init, i_cond, i_step) = counter("i");
    let outer = b.for_loop(
        i_init,
        i_cond,
        i_step,
        b.body([
            update("in", BinaryOp::Add, b.ident("i")),
            update("in", BinaryOp::Mod, b.int(10)),
            inner,
        ]),
    );

    let drain = b.do_while(
        b.body([
            update("i", BinaryOp::Sub, b.int(1)),
            update("in", BinaryOp::Sub, b.ident("i")),
        ]),
        b.binary(
            b.binary(b.ident("in"), BinaryOp::Gt, b.int(0)),
            BinaryOp::Or,
            b.binary(b.ident("i"), BinaryOp::Gt, b.int(0)),
        ),
    );

    let settle = b.while_loop(
        b.binary(b.ident("i"), BinaryOp::Lt, b.int(100)),
        b.body([
            b.expr_stmt(increment("i")),
            update("in", BinaryOp::Mod, b.ident("i")),
            b.if_chain(
                [(
                    b.binary(b.ident("in"), BinaryOp::Eq, b.int(0)),
                    b.body([b.brk()]),
                )],
                None,
            ),
        ]),
    );

    let body = b.body([
        outer,
        b.let_("i", b.int(10)),
        drain,
        settle,
        b.ret(b.ident("in")),
    ]);
    b.finish(LOOP_NAME, "in", body)
}

#[cfg(test)]
mod tests;
