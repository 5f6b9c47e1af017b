// Demonstration suite for the minispec engine.
// Usage: cargo run --bin demo  (exits nonzero: the last spec fails on purpose)

use minispec::{expect_f64, expect_i32, expect_str, EPSILON};

minispec::spec!(expectations_demo, |s| {
    s.describe("expect()", |d| {
        d.it("works with integers and floating point numbers", |t| {
            let demo_int = 42;
            expect_i32!(t, demo_int, to_be(42));
            // likeness for integers is exactly equality
            expect_i32!(t, demo_int, to_be_like(42));
            expect_i32!(t, demo_int, not_to_be(90));
            expect_i32!(t, demo_int, not_to_be_like(90));

            let demo_double = 38.121;
            expect_f64!(t, demo_double, to_be(38.121));
            // likeness for doubles is |actual - expected| <= EPSILON
            expect_f64!(t, demo_double, to_be_like(demo_double + EPSILON));
            expect_f64!(t, demo_double, to_be_like(demo_double - EPSILON));
            expect_f64!(t, demo_double, not_to_be_like(demo_double + 2.0 * EPSILON));
            expect_f64!(t, demo_double, not_to_be(0.444444));
        });
    });

    s.describe("expect()", |d| {
        d.it("works with nullable strings as well", |t| {
            let demo_str = "i am a demo string";
            expect_str!(t, demo_str, to_be("i am a demo string"));
            // likeness for strings is a case-insensitive comparison
            expect_str!(t, demo_str, to_be_like("i Am a DEmO strING"));
            expect_str!(t, demo_str, not_to_be_like("another string"));
            // the null value is welcome on either side
            expect_str!(t, demo_str, not_to_be(None::<&str>));
            expect_str!(t, None::<&str>, to_be(None::<&str>));
            expect_str!(t, None::<&str>, not_to_be(demo_str));
        });
    });
});

minispec::spec!(failing_demo, |s| {
    s.describe("This one", |d| {
        d.it("may actually fail", |t| {
            expect_i32!(t, 1, to_be(9));
        });
    });
});

minispec::suite!(expectations_demo, failing_demo);
