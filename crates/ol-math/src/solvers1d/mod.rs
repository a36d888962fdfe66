//! 1D root-finding solvers.

use ol_core::{ensure, errors::Result, fail, Real};

const MAX_ITERATIONS: u32 = 100;
const DEFAULT_ACCURACY: Real = 1.0e-11;

fn effective_accuracy(accuracy: Real) -> Real {
    if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    }
}

// ── Brent ─────────────────────────────────────────────────────────────────────

/// A sign-changing interval `[a, b]` plus the iterate history Brent needs.
///
/// `b` is the best estimate (smallest `|f|`), `a` the contrapoint with the
/// opposite sign, `c` the previous `b` and `d` the one before it.
struct Bracket {
    a: Real,
    fa: Real,
    b: Real,
    fb: Real,
    c: Real,
    fc: Real,
    d: Real,
    bisected: bool,
}

impl Bracket {
    fn new(a: Real, fa: Real, b: Real, fb: Real) -> Self {
        let (a, fa, b, fb) = if fa.abs() < fb.abs() {
            (b, fb, a, fa)
        } else {
            (a, fa, b, fb)
        };
        Self {
            a,
            fa,
            b,
            fb,
            c: a,
            fc: fa,
            d: a,
            bisected: true,
        }
    }

    /// Keep the endpoint with the smaller residual in `b`.
    fn order(&mut self) {
        if self.fa.abs() < self.fb.abs() {
            std::mem::swap(&mut self.a, &mut self.b);
            std::mem::swap(&mut self.fa, &mut self.fb);
        }
    }

    fn converged(&self, tol: Real) -> bool {
        self.fb == 0.0 || (self.b - self.a).abs() <= 2.0 * tol
    }

    /// Inverse quadratic interpolation through `a, b, c`, or the secant
    /// through `a, b` when two residuals coincide.
    fn interpolate(&self) -> Real {
        let Self { a, fa, b, fb, c, fc, .. } = *self;
        if fa != fc && fb != fc {
            a * fb * fc / ((fa - fb) * (fa - fc))
                + b * fa * fc / ((fb - fa) * (fb - fc))
                + c * fa * fb / ((fc - fa) * (fc - fb))
        } else {
            b - fb * (b - a) / (fb - fa)
        }
    }

    /// The interpolated point if it is trusted, otherwise the midpoint.
    fn next_point(&mut self, tol: Real) -> Real {
        let s = self.interpolate();
        let quarter = (3.0 * self.a + self.b) / 4.0;
        let inside = s > quarter.min(self.b) && s < quarter.max(self.b);
        // compare against the step taken two iterations ago
        let reference = if self.bisected {
            (self.b - self.c).abs()
        } else {
            (self.c - self.d).abs()
        };
        let trusted = inside && (s - self.b).abs() < 0.5 * reference && reference >= tol;
        self.bisected = !trusted;
        if trusted {
            s
        } else {
            0.5 * (self.a + self.b)
        }
    }

    /// Replace one endpoint with `(s, fs)` so the root stays bracketed.
    fn shrink(&mut self, s: Real, fs: Real) {
        self.d = self.c;
        self.c = self.b;
        self.fc = self.fb;
        if self.fa * fs < 0.0 {
            self.b = s;
            self.fb = fs;
        } else {
            self.a = s;
            self.fa = fs;
        }
        self.order();
    }
}

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Mixes inverse quadratic interpolation and secant steps, falling back to
/// bisection whenever the interpolated step is not trusted. `f(x_min)` and
/// `f(x_max)` must bracket the root; the result is within `accuracy` of it.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let accuracy = effective_accuracy(accuracy);
    let (f_min, f_max) = (f(x_min), f(x_max));
    ensure!(
        f_min * f_max <= 0.0,
        "Brent: f({x_min}) = {f_min} and f({x_max}) = {f_max} must have opposite signs"
    );
    if f_min == 0.0 {
        return Ok(x_min);
    }
    if f_max == 0.0 {
        return Ok(x_max);
    }

    let mut bracket = Bracket::new(x_min, f_min, x_max, f_max);
    for _ in 0..MAX_ITERATIONS {
        let tol = 2.0 * Real::EPSILON * bracket.b.abs() + 0.5 * accuracy;
        if bracket.converged(tol) {
            return Ok(bracket.b);
        }
        let s = bracket.next_point(tol);
        bracket.shrink(s, f(s));
    }
    fail!("Brent solver: maximum iterations ({MAX_ITERATIONS}) reached");
}
