/// Choose between chunks and par_chunks
#[cfg(not(feature = "parallel"))]
#[macro_export]
macro_rules! chunks {
    ($e:expr, $size:expr) => {
        $e.chunks($size)
    };
}

/// Choose between chunks and par_chunks
#[cfg(feature = "parallel")]
#[macro_export]
macro_rules! chunks {
    ($e:expr, $size:expr) => {
        $e.par_chunks($size)
    };
}

/// Choose between iter_mut and par_iter_mut
#[cfg(not(feature = "parallel"))]
#[macro_export]
macro_rules! iter_mut {
    ($e:expr) => {
        $e.iter_mut()
    };
}

/// Choose between iter_mut and par_iter_mut
#[cfg(feature = "parallel")]
#[macro_export]
macro_rules! iter_mut {
    ($e:expr) => {
        $e.par_iter_mut()
    };
}

/// Choose between rayon::join and calling both closures in order
#[cfg(not(feature = "parallel"))]
#[macro_export]
macro_rules! join {
    ($a:expr, $b:expr) => {
        (($a)(), ($b)())
    };
}

/// Choose between rayon::join and calling both closures in order
#[cfg(feature = "parallel")]
#[macro_export]
macro_rules! join {
    ($a:expr, $b:expr) => {
        ::rayon::join($a, $b)
    };
}
