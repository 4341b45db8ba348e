pub mod configuration;

pub mod alias {
    pub mod aliastable;
}

pub mod depth {
    pub mod depthaxis;
    pub mod resampler;

    pub mod deviation {
        pub mod trajectory;
        pub mod minimumcurvature;
        pub mod deviationintegrator;
    }
}

pub mod layout {
    pub mod curverange;
    pub mod curvestyle;
    pub mod track;
    pub mod trackgrid;
    pub mod pointoverlay;
    pub mod plotsizing;
    pub mod layoutconfig;
    pub mod defaultpreset;
    pub mod layouterror;
    pub mod axisscale;
    pub mod labelformat;
    pub mod geometry;
    pub mod composer;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod interpolation {
        pub mod point2d;
        pub mod interpolant;
        pub mod piecewiselinear;
    }
    pub mod round;
}

pub mod pipeline;

pub mod welldata {
    pub mod curveerror;
    pub mod logcurve;
    pub mod deviationsurvey;
    pub mod wellframe;
    pub mod well;
}
