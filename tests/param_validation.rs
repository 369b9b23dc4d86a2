// Parameter validation: bad parameters become NaN / null lanes, structural problems
// become errors, and nothing panics.

mod util;

mod param_validation_tests {
    use super::util::{assert_close, lanes};

    use minarrow::Bitmask;

    use extra_dist_kernels::errors::KernelError;
    use extra_dist_kernels::kernels::scientific::distributions::shared::sampler::seeded_rng;
    use extra_dist_kernels::kernels::scientific::distributions::shared::validate::RowMatrix;
    use extra_dist_kernels::kernels::scientific::distributions::univariate::categorical::{
        categorical_cdf, categorical_pmf, categorical_quantile, categorical_sample,
    };
    use extra_dist_kernels::kernels::scientific::distributions::univariate::discrete_normal::{
        discrete_normal_pmf, discrete_normal_sample,
    };
    use extra_dist_kernels::kernels::scientific::distributions::univariate::gev::{
        gev_cdf, gev_pdf, gev_pdf_std_to, gev_quantile, gev_sample,
    };
    use extra_dist_kernels::kernels::scientific::distributions::univariate::kumaraswamy::{
        kumaraswamy_cdf, kumaraswamy_sample,
    };
    use extra_dist_kernels::kernels::scientific::distributions::univariate::multinomial::{
        multinomial_pmf, multinomial_sample,
    };
    use extra_dist_kernels::kernels::scientific::distributions::univariate::power::{
        power_pdf, power_quantile, power_sample,
    };

    // ---- per-lane invalid parameters ----

    #[test]
    fn gev_non_positive_scale_is_nan_lane() {
        let out = gev_pdf(&[0.0], &[0.0], &[1.0, -1.0, 0.0], &[0.1], false, None, None).unwrap();
        assert!(out.data[0].is_finite());
        assert!(out.data[1].is_nan());
        assert!(out.data[2].is_nan());
    }

    #[test]
    fn kumaraswamy_non_positive_shape_is_nan_lane() {
        let out = kumaraswamy_cdf(&[0.5], &[0.0, 1.0], &[1.0], true, false, None, None).unwrap();
        assert!(out.data[0].is_nan());
        assert_close(out.data[1], 0.5, 1e-15);
    }

    #[test]
    fn power_invalid_params_and_probabilities() {
        let out = power_pdf(&[1.0], &[2.0, -2.0], &[1.0, 1.0], false, None, None).unwrap();
        assert_close(out.data[0], 0.5, 1e-15);
        assert!(out.data[1].is_nan());

        let q = power_quantile(&[1.5, -0.1, 0.5], &[2.0], &[1.0], true, false, None, None).unwrap();
        assert!(q.data[0].is_nan());
        assert!(q.data[1].is_nan());
        assert_close(q.data[2], 1.0, 1e-15);
    }

    #[test]
    fn gev_quantile_outside_unit_interval_is_nan() {
        let q = gev_quantile(&[-0.5, 2.0], &[0.0], &[1.0], &[0.2], true, false, None, None).unwrap();
        assert!(q.data.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn discrete_normal_zero_sd_is_nan_lane() {
        let out = discrete_normal_pmf(&[0.0], &[0.0], &[0.0, 1.0], false, None, None).unwrap();
        assert!(out.data[0].is_nan());
        assert!(out.data[1] > 0.0);
    }

    #[test]
    fn nan_inputs_propagate() {
        let out = gev_cdf(&[f64::NAN, 0.0], &[0.0], &[1.0], &[0.0, f64::NAN], true, false, None, None)
            .unwrap();
        assert!(out.data[0].is_nan());
        assert!(out.data[1].is_nan());
    }

    // ---- probability rows ----

    #[test]
    fn categorical_invalid_row_gives_nan_and_null() {
        // 0.7 + 0.2 + 0.1 sums to 0.9999999999999999
        let bad = RowMatrix::single_row(&[0.7, 0.2, 0.1]).unwrap();
        let pmf = categorical_pmf(&[1.0], bad, false, None, None).unwrap();
        assert!(pmf.data[0].is_nan());
        let cdf = categorical_cdf(&[1.0], bad, true, false, None, None).unwrap();
        assert!(cdf.data[0].is_nan());
        let q = categorical_quantile(&[0.5], bad, true, false, None, None).unwrap();
        assert_eq!(lanes(&q), vec![None]);

        let mut rng = seeded_rng(1);
        let s = categorical_sample(3, bad, &mut rng).unwrap();
        assert_eq!(lanes(&s), vec![None, None, None]);
    }

    #[test]
    fn categorical_negative_entry_is_invalid() {
        let bad = RowMatrix::single_row(&[1.5, -0.5]).unwrap();
        let pmf = categorical_pmf(&[1.0], bad, false, None, None).unwrap();
        assert!(pmf.data[0].is_nan());
    }

    #[test]
    fn multinomial_invalid_row_vs_impossible_outcome() {
        let bad = [0.6, 0.6];
        // counts do not sum to size: zero mass regardless of the row
        let out = multinomial_pmf(
            RowMatrix::single_row(&[1.0, 1.0]).unwrap(),
            &[3.0],
            RowMatrix::single_row(&bad).unwrap(),
            false,
            None,
            None,
        )
        .unwrap();
        assert_eq!(out.data[0], 0.0);
        // possible outcome with a bad row: NaN
        let out = multinomial_pmf(
            RowMatrix::single_row(&[1.0, 1.0]).unwrap(),
            &[2.0],
            RowMatrix::single_row(&bad).unwrap(),
            false,
            None,
            None,
        )
        .unwrap();
        assert!(out.data[0].is_nan());
    }

    #[test]
    fn multinomial_sample_nulls_whole_row() {
        let data = [0.5, 0.5, 0.6, 0.6];
        let prob = RowMatrix::new(&data, 2).unwrap();
        let mut rng = seeded_rng(3);
        let s = multinomial_sample(2, &[4.0], prob, &mut rng).unwrap();
        let l = lanes(&s);
        assert_eq!(l.len(), 4);
        assert!(l[0].is_some() && l[1].is_some());
        assert_eq!(l[0].unwrap() + l[1].unwrap(), 4);
        assert_eq!(&l[2..], &[None, None]);
    }

    // ---- structural errors ----

    #[test]
    fn multinomial_column_mismatch_is_error() {
        let r = multinomial_pmf(
            RowMatrix::single_row(&[1.0, 1.0]).unwrap(),
            &[2.0],
            RowMatrix::single_row(&[0.2, 0.3, 0.5]).unwrap(),
            false,
            None,
            None,
        );
        assert!(matches!(r, Err(KernelError::LengthMismatch(_))));
    }

    #[test]
    fn row_matrix_shape_errors() {
        let data = [0.2, 0.3, 0.5, 0.5];
        assert!(matches!(RowMatrix::new(&data, 3), Err(KernelError::InvalidArguments(_))));
        assert!(matches!(RowMatrix::new(&data, 0), Err(KernelError::InvalidArguments(_))));
        assert!(matches!(RowMatrix::new(&[], 2), Err(KernelError::InvalidArguments(_))));
        assert!(RowMatrix::new(&data, 2).is_ok());
    }

    #[test]
    fn short_null_mask_is_error() {
        let mask = Bitmask::new_set_all(1, true);
        let r = gev_pdf(&[0.0, 1.0], &[0.0], &[1.0], &[0.0], false, Some(&mask), Some(0));
        assert!(r.is_err());
    }

    #[test]
    fn output_buffer_must_match_recycled_length() {
        let mut buf = [0.0; 2];
        let r = gev_pdf_std_to(&[0.0], &[0.0, 1.0, 2.0], &[1.0], &[0.0], false, &mut buf, None, None);
        assert!(matches!(r, Err(KernelError::OutOfBounds(_))));

        let mut buf = [0.0; 3];
        let r = gev_pdf_std_to(&[0.0], &[0.0, 1.0, 2.0], &[1.0], &[0.0], false, &mut buf, None, None);
        assert!(r.unwrap().is_none());
        assert!(buf.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn empty_inputs_give_empty_outputs() {
        let out = gev_pdf(&[], &[0.0], &[1.0], &[0.0], false, None, None).unwrap();
        assert_eq!(out.data.len(), 0);
        let out = power_pdf(&[1.0, 2.0], &[], &[1.0], false, None, None).unwrap();
        assert_eq!(out.data.len(), 0);
        let out = discrete_normal_pmf(&[1.0], &[0.0], &[], false, None, None).unwrap();
        assert_eq!(out.data.len(), 0);
    }

    #[test]
    fn samplers_reject_empty_params() {
        let mut rng = seeded_rng(0);
        assert!(gev_sample(4, &[], &[1.0], &[0.0], &mut rng).is_err());
        assert!(kumaraswamy_sample(4, &[1.0], &[], &mut rng).is_err());
        assert!(power_sample(4, &[], &[1.0], &mut rng).is_err());
        assert!(discrete_normal_sample(4, &[0.0], &[], &mut rng).is_err());
        let prob = RowMatrix::single_row(&[0.5, 0.5]).unwrap();
        assert!(multinomial_sample(4, &[], prob, &mut rng).is_err());

        // zero draws never fail
        assert_eq!(gev_sample(0, &[], &[], &[], &mut rng).unwrap().data.len(), 0);
    }

    #[test]
    fn sampler_bad_params_give_nan_draws() {
        let mut rng = seeded_rng(0);
        let s = power_sample(3, &[1.0, -1.0], &[2.0], &mut rng).unwrap();
        assert!(s.data[0].is_finite());
        assert!(s.data[1].is_nan());
        assert!(s.data[2].is_finite());
    }

    // ---- null masks ----

    #[test]
    fn null_mask_recycles_with_x() {
        let mut mask = Bitmask::new_set_all(2, true);
        mask.set(1, false);
        let out = power_pdf(&[1.0, 1.0], &[2.0, 2.0, 2.0, 2.0], &[1.0], false, Some(&mask), Some(1))
            .unwrap();
        let m = out.null_mask.as_ref().unwrap();
        let valid: Vec<bool> = (0..4).map(|i| m.get(i)).collect();
        assert_eq!(valid, vec![true, false, true, false]);
        assert_close(out.data[0], 0.5, 1e-15);
        assert!(out.data[1].is_nan());
    }

    #[test]
    fn categorical_quantile_null_input_is_null_output() {
        let mut mask = Bitmask::new_set_all(3, true);
        mask.set(0, false);
        let row = RowMatrix::single_row(&[0.5, 0.5]).unwrap();
        let q = categorical_quantile(&[0.2, 0.4, 0.9], row, true, false, Some(&mask), Some(1)).unwrap();
        assert_eq!(lanes(&q), vec![None, Some(1), Some(2)]);
    }
}
